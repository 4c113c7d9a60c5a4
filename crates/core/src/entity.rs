//! Entity trait: identity that survives every field change.

/// A record whose identity is its key, not its field values.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether both records denote the same entity, whatever their fields hold.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
