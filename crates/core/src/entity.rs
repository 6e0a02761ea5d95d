//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Collections of entities (e.g. the product catalog) rely on `id()` to keep
/// each entity present at most once.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
