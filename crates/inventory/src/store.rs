use std::io::{self, Write};

use shopinv_catalog::CategoryId;
use shopinv_core::{DomainError, DomainResult, Entity, ItemId, ItemIdGenerator};

use crate::item::{Item, ItemDetails};
use crate::table;

/// Number of items reserved up front. Advisory only; the store grows past it.
pub const DEFAULT_CAPACITY: usize = 30;

/// Ordered in-memory collection of stocked items.
///
/// Items keep insertion order. Removal shifts later items down; editing
/// updates an item where it stands.
#[derive(Debug, Clone)]
pub struct Inventory {
    items: Vec<Item>,
    ids: ItemIdGenerator,
}

impl Inventory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Reserve room for `capacity` items. A reservation that cannot be
    /// satisfied is logged and skipped; the store still grows on demand.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut items = Vec::new();
        if let Err(err) = items.try_reserve(capacity) {
            tracing::warn!(capacity, error = %err, "could not reserve inventory capacity");
        }
        Self {
            items,
            ids: ItemIdGenerator::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in current sequence order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Append a new item and return its surrogate key.
    ///
    /// No duplicate or capacity check: two items may share a model code.
    pub fn add(&mut self, details: ItemDetails) -> ItemId {
        let id = self.ids.next_id();
        tracing::info!(
            item_id = %id,
            model_code = %details.model_code,
            category = %details.category,
            "item added"
        );
        self.items.push(Item::new(id, details));
        id
    }

    /// First item (in sequence order) matching `predicate`.
    pub fn search<P>(&self, predicate: P) -> Option<ItemId>
    where
        P: Fn(&Item) -> bool,
    {
        self.items
            .iter()
            .find(|item| predicate(item))
            .map(Item::id_typed)
    }

    /// Exact, case-sensitive match on model code.
    pub fn find_by_model_code(&self, model_code: &str) -> Option<ItemId> {
        self.search(|item| item.model_code() == model_code)
    }

    /// Exact match on category id. Ids outside the catalog never match.
    pub fn find_by_category(&self, category: CategoryId) -> Option<ItemId> {
        self.search(|item| item.category().id() == category)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.has_id(&id))
    }

    fn position(&self, id: ItemId) -> DomainResult<usize> {
        self.items
            .iter()
            .position(|item| item.has_id(&id))
            .ok_or_else(DomainError::not_found)
    }

    /// Remove the item with `id`, keeping the relative order of the rest.
    ///
    /// Returns `NotFound` if it was already removed.
    pub fn remove(&mut self, id: ItemId) -> DomainResult<Item> {
        let index = self.position(id)?;
        let item = self.items.remove(index);
        tracing::info!(item_id = %id, model_code = %item.model_code(), "item removed");
        Ok(item)
    }

    /// Replace the fields of the item with `id` in place.
    ///
    /// The item keeps its id and its position in the sequence.
    pub fn edit(&mut self, id: ItemId, details: ItemDetails) -> DomainResult<&Item> {
        let index = self.position(id)?;
        let item = &mut self.items[index];
        let previous = item.replace_details(details);
        tracing::info!(
            item_id = %id,
            from = %previous.model_code,
            to = %item.model_code(),
            "item edited"
        );
        Ok(&*item)
    }

    /// Print every item as a fixed-width table, in sequence order.
    pub fn list<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        table::write_table(out, &self.items)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
