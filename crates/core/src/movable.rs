//! Contract for entities that live in an explicitly ordered list.

use crate::types::DbId;

/// An entity with a surrogate key and a zero-based rank within its sibling
/// list.
///
/// Both `id` and `position` are `None` until the persistence layer assigns
/// them, and it assigns them together: an entity is either fully unsaved or
/// fully placed. Sibling lists are scoped by [`Movable::scope`]: episodes
/// share a list per season, songs per music entry, and top-level entities
/// share one global list.
pub trait Movable {
    /// Surrogate key, unset before the entity is first persisted.
    fn id(&self) -> Option<DbId>;

    /// Zero-based rank within the sibling list, unset before persistence.
    fn position(&self) -> Option<i32>;

    /// Key of the parent scope the sibling list belongs to.
    ///
    /// `None` for top-level entities.
    fn scope(&self) -> Option<DbId> {
        None
    }

    /// Copy of this entity with the given position. Identifier and all other
    /// fields are untouched.
    fn with_position(&self, position: i32) -> Self;

    /// Copy of this entity with identifier and position assigned together,
    /// as the persistence layer does at insertion time.
    fn with_identity(&self, id: DbId, position: i32) -> Self;

    /// Copy of this entity with identifier and position cleared, suitable as
    /// an insertion candidate.
    fn as_new(&self) -> Self;
}
