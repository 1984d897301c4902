use shopinv_catalog::Category;
use shopinv_core::{Entity, ItemId, ValueObject};

/// Editable fields of a stocked item.
///
/// `model_code` is the operator-facing name used by search; duplicates are
/// allowed. `quantity` has no floor unless the validation policy adds one.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetails {
    pub category: Category,
    pub model_code: String,
    /// Price in GBP.
    pub price: f64,
    pub quantity: i64,
}

impl ItemDetails {
    pub fn new(category: Category, model_code: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            category,
            model_code: model_code.into(),
            price,
            quantity,
        }
    }
}

impl ValueObject for ItemDetails {}

/// Entity: one stocked entry of the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ItemId,
    details: ItemDetails,
}

impl Item {
    pub(crate) fn new(id: ItemId, details: ItemDetails) -> Self {
        Self { id, details }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn details(&self) -> &ItemDetails {
        &self.details
    }

    pub fn category(&self) -> Category {
        self.details.category
    }

    pub fn model_code(&self) -> &str {
        &self.details.model_code
    }

    pub fn price(&self) -> f64 {
        self.details.price
    }

    pub fn quantity(&self) -> i64 {
        self.details.quantity
    }

    /// Swap in new details, returning the old ones. Identity is untouched.
    pub(crate) fn replace_details(&mut self, details: ItemDetails) -> ItemDetails {
        core::mem::replace(&mut self.details, details)
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
