//! Parsing and validation of operator-entered item fields.
//!
//! Every function takes the raw line the operator typed and yields either a
//! typed value or a [`FieldError`] naming what was wrong with it.

use thiserror::Error;

use shopinv_catalog::{Category, CategoryId};
use shopinv_core::DomainError;

/// Longest model code accepted, in characters.
pub const MAX_MODEL_CODE_LEN: usize = 64;

/// Which numeric fields may go below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub allow_negative_price: bool,
    pub allow_negative_quantity: bool,
}

impl Default for ValidationPolicy {
    /// Prices have a zero floor; stock counts have none.
    fn default() -> Self {
        Self {
            allow_negative_price: false,
            allow_negative_quantity: true,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} must be a number, got {input:?}")]
    NonNumeric { field: &'static str, input: String },

    #[error("{field} cannot be negative")]
    Negative { field: &'static str },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} is longer than {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("no product category with id {0}")]
    UnknownCategory(CategoryId),
}

impl From<FieldError> for DomainError {
    fn from(value: FieldError) -> Self {
        DomainError::validation(value.to_string())
    }
}

fn non_empty<'a>(input: &'a str, field: &'static str) -> Result<&'a str, FieldError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Empty { field });
    }
    Ok(trimmed)
}

/// Parse a category index without checking it against the catalog.
pub fn parse_category_id(input: &str) -> Result<CategoryId, FieldError> {
    let text = non_empty(input, "category")?;
    text.parse::<i32>()
        .map(CategoryId::new)
        .map_err(|_| FieldError::NonNumeric {
            field: "category",
            input: text.to_string(),
        })
}

/// Parse a category index that must name a stocked category.
pub fn parse_category(input: &str) -> Result<Category, FieldError> {
    let id = parse_category_id(input)?;
    Category::try_from(id).map_err(FieldError::UnknownCategory)
}

pub fn parse_model_code(input: &str) -> Result<String, FieldError> {
    let text = non_empty(input, "model code")?;
    if text.chars().count() > MAX_MODEL_CODE_LEN {
        return Err(FieldError::TooLong {
            field: "model code",
            max: MAX_MODEL_CODE_LEN,
        });
    }
    Ok(text.to_string())
}

pub fn parse_price(input: &str, policy: &ValidationPolicy) -> Result<f64, FieldError> {
    let text = non_empty(input, "price")?;
    let price = text.parse::<f64>().map_err(|_| FieldError::NonNumeric {
        field: "price",
        input: text.to_string(),
    })?;
    if !price.is_finite() {
        return Err(FieldError::NotFinite { field: "price" });
    }
    if price < 0.0 && !policy.allow_negative_price {
        return Err(FieldError::Negative { field: "price" });
    }
    Ok(price)
}

pub fn parse_quantity(input: &str, policy: &ValidationPolicy) -> Result<i64, FieldError> {
    let text = non_empty(input, "quantity")?;
    let quantity = text.parse::<i64>().map_err(|_| FieldError::NonNumeric {
        field: "quantity",
        input: text.to_string(),
    })?;
    if quantity < 0 && !policy.allow_negative_quantity {
        return Err(FieldError::Negative { field: "quantity" });
    }
    Ok(quantity)
}
