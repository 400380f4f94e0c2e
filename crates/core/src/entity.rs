//! Entity trait: identity + continuity across state changes.

use crate::id::SequentialId;

/// Entity managed by a [`Repository`](crate::Repository).
///
/// Entities are built from a draft once the repository has issued their id,
/// so an entity never exists without one.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: SequentialId;

    /// Validated data an entity is created from.
    type Draft;

    /// Short lowercase name of the entity kind, used in logs and messages.
    const KIND: &'static str;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// Construct the entity once its id has been issued.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;
}
