//! Things tracked by a stable key rather than by their field values.

/// A record whose identity outlives changes to its fields.
pub trait Entity {
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Whether this record is the one keyed by `id`.
    fn has_id(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}
