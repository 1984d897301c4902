//! Inventory store module.
//!
//! Holds the stocked items of one shop run, entirely in memory. Lookup is a
//! linear scan; items are addressed by their surrogate [`ItemId`] rather than
//! by position, so a located item stays addressable across other mutations.

pub mod field;
pub mod item;
pub mod store;
pub mod table;

pub use field::{
    FieldError, MAX_MODEL_CODE_LEN, ValidationPolicy, parse_category, parse_category_id,
    parse_model_code, parse_price, parse_quantity,
};
pub use item::{Item, ItemDetails};
pub use shopinv_core::ItemId;
pub use store::{DEFAULT_CAPACITY, Inventory};
