//! Product catalog: the closed set of categories stocked in the store.
//!
//! Pure lookup tables; no mutable state.

pub mod category;

pub use category::{Category, CategoryId, entries, is_valid, list_all, name_of};
