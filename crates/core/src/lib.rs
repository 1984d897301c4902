//! `shopinv-core` — domain building blocks shared by the inventory crates.
//!
//! This crate contains **pure domain** primitives (no terminal I/O).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ItemId, ItemIdGenerator};
pub use value_object::ValueObject;
