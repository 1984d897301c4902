//! Strongly-typed identifiers used across the domain.

/// Surrogate key of a stocked item.
///
/// Assigned once when the item enters an inventory and never reused within
/// that inventory, so it stays valid across unrelated additions and removals.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u64);

impl ItemId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic source of [`ItemId`]s.
///
/// Ids start at 1; `0` is never handed out.
#[derive(Debug, Clone)]
pub struct ItemIdGenerator {
    next: u64,
}

impl ItemIdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the next id.
    pub fn next_id(&mut self) -> ItemId {
        let id = ItemId(self.next);
        self.next += 1;
        id
    }
}

impl Default for ItemIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
