//! Persistence collaborator for ordered entities.
//!
//! Defines the abstract interface the facade layer drives; concrete
//! implementations live in the db crate (PostgreSQL) and in test support
//! code (in-memory).

use async_trait::async_trait;

use crate::error::CoreError;
use crate::movable::Movable;
use crate::types::DbId;

/// Persistence operations for one ordered entity type.
///
/// Implementations own scope resolution: [`siblings`](Self::siblings) returns
/// the list the entity competes in (same parent for scoped entities, the
/// whole table for top-level ones), sorted by position.
#[async_trait]
pub trait MovableRepository<T: Movable + Send + Sync>: Send + Sync {
    /// Every entity of the type, ordered by scope, then position.
    async fn find_all(&self) -> Result<Vec<T>, CoreError>;

    /// Targeted lookup by identifier.
    async fn find_by_id(&self, id: DbId) -> Result<Option<T>, CoreError>;

    /// The sibling list of `entity`, in position order.
    async fn siblings(&self, entity: &T) -> Result<Vec<T>, CoreError>;

    /// Persist a new entity, assigning its identifier and the next free
    /// position in its scope together. Returns the stored row.
    async fn insert(&self, candidate: &T) -> Result<T, CoreError>;

    /// Persist field changes of one existing row, returning it.
    async fn update(&self, entity: &T) -> Result<T, CoreError>;

    /// Persist position assignments for all given rows atomically.
    ///
    /// A position swap must never be observable half-applied, so both rows
    /// of a swap go through a single call.
    async fn update_all(&self, entities: &[T]) -> Result<(), CoreError>;

    /// Delete by identifier. Returns whether a row was removed.
    async fn delete(&self, id: DbId) -> Result<bool, CoreError>;
}
