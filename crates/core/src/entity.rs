//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Entities compare by identity, never by their mutable attributes. Identity
/// may be partially unknown before persistence (e.g. a store-assigned id), so
/// the trait exposes it as a borrowed key rather than requiring an id up front.
pub trait Entity {
    /// Identity key the entity is compared and hashed by.
    type Key<'a>: Eq + core::hash::Hash + core::fmt::Debug
    where
        Self: 'a;

    /// Returns the identity key.
    fn identity(&self) -> Self::Key<'_>;

    /// Two entities are the same when their identity keys match.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}
