//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object has no identity of its own: two values with the same
/// attributes are interchangeable. Replacing the value held by an entity
/// keeps the entity's identity intact.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct ItemDetails { model_code: String, price: f64, quantity: i64 }
///
/// impl ValueObject for ItemDetails {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
