//! Interactive text-menu shell over a single in-memory inventory.

pub mod config;
pub mod menu;
pub mod shell;

pub use config::ShellConfig;
pub use menu::{MenuOption, SearchMode};
pub use shell::{BANNER, Shell};
