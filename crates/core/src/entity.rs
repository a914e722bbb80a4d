//! Entity trait: identity + continuity across catalog versions.

/// Entity marker + minimal interface.
///
/// Catalog entities (products, plans, price lists) are identified by their
/// name; two entities with the same name are the same entity even when their
/// definitions differ between catalog versions.
pub trait Entity {
    /// Identifier type (catalog entities use their name).
    type Id: ?Sized + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
