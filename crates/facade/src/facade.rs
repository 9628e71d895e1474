//! Generic facade over the validator, the reordering engine and a
//! repository.
//!
//! One instance serves one entity type. Every mutating operation follows the
//! same discipline: validate, then persist; a failed validation returns the
//! full event list and leaves the repository untouched. A move reads the
//! sibling list, validates, computes the swap and persists both rows as one
//! unit. Interleaving two moves against the same list without external
//! serialization is the caller's problem, not detected here.

use std::collections::BTreeMap;

use shelf_core::movable::Movable;
use shelf_core::mover::{self, Direction};
use shelf_core::repository::MovableRepository;
use shelf_core::types::DbId;
use shelf_core::validation::{MovableValidator, ValidationResult};

use crate::error::{FacadeError, FacadeResult};

/// CRUD and reordering operations for one ordered entity type.
pub struct MovableFacade<T, R> {
    validator: MovableValidator<T>,
    repo: R,
}

impl<T, R> MovableFacade<T, R>
where
    T: Movable + Clone + Send + Sync,
    R: MovableRepository<T>,
{
    pub fn new(validator: MovableValidator<T>, repo: R) -> Self {
        Self { validator, repo }
    }

    pub fn validator(&self) -> &MovableValidator<T> {
        &self.validator
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// All entities of the type, ordered by scope, then position.
    pub async fn get_all(&self) -> FacadeResult<Vec<T>> {
        Ok(self.repo.find_all().await?)
    }

    /// Targeted lookup by identifier.
    pub async fn get(&self, id: DbId) -> FacadeResult<Option<T>> {
        Ok(self.repo.find_by_id(id).await?)
    }

    /// Validate and persist a new entity. The stored row comes back with its
    /// identifier and position assigned.
    pub async fn add(&self, candidate: Option<T>) -> FacadeResult<T> {
        let result = self.validator.validate_for_create(candidate.as_ref());
        match (candidate, result.is_ok()) {
            (Some(candidate), true) => {
                tracing::debug!(entity = self.validator.name(), "adding");
                Ok(self.repo.insert(&candidate).await?)
            }
            _ => Err(self.rejected(result)),
        }
    }

    /// Validate and persist field changes of an existing entity.
    pub async fn update(&self, candidate: Option<T>) -> FacadeResult<T> {
        let result = self.validator.validate_for_update(candidate.as_ref());
        let candidate = match (candidate, result.is_ok()) {
            (Some(candidate), true) => candidate,
            _ => return Err(self.rejected(result)),
        };
        let existing = match candidate.id() {
            Some(id) => self.repo.find_by_id(id).await?,
            None => None,
        };
        let result = self.validator.validate_exists(existing.as_ref());
        if !result.is_ok() {
            return Err(self.rejected(result));
        }
        tracing::debug!(entity = self.validator.name(), id = candidate.id(), "updating");
        Ok(self.repo.update(&candidate).await?)
    }

    /// Delete an existing entity.
    pub async fn remove(&self, id: DbId) -> FacadeResult<()> {
        self.require(id).await?;
        tracing::debug!(entity = self.validator.name(), id, "removing");
        self.repo.delete(id).await?;
        Ok(())
    }

    /// Insert a copy of an existing entity; the copy goes to the end of its
    /// sibling list with a fresh identifier.
    pub async fn duplicate(&self, id: DbId) -> FacadeResult<T> {
        let original = self.require(id).await?;
        tracing::debug!(entity = self.validator.name(), id, "duplicating");
        Ok(self.repo.insert(&original.as_new()).await?)
    }

    /// Move an entity one slot towards the front of its sibling list.
    pub async fn move_up(&self, id: DbId) -> FacadeResult<()> {
        self.shift(id, Direction::Up).await
    }

    /// Move an entity one slot towards the back of its sibling list.
    pub async fn move_down(&self, id: DbId) -> FacadeResult<()> {
        self.shift(id, Direction::Down).await
    }

    /// Repair drifted positions: every sibling list is renumbered 0..n in
    /// its current order.
    pub async fn update_positions(&self) -> FacadeResult<()> {
        let all = self.repo.find_all().await?;
        let mut groups: BTreeMap<Option<DbId>, Vec<T>> = BTreeMap::new();
        for entity in all {
            groups.entry(entity.scope()).or_default().push(entity);
        }
        let mut updated = Vec::new();
        for siblings in groups.values() {
            updated.extend(mover::renumber(siblings));
        }
        tracing::debug!(entity = self.validator.name(), rows = updated.len(), "renumbering");
        self.repo.update_all(&updated).await?;
        Ok(())
    }

    async fn shift(&self, id: DbId, direction: Direction) -> FacadeResult<()> {
        let target = self.require(id).await?;
        let siblings = self.repo.siblings(&target).await?;
        let result = self.validator.validate_moving(&target, &siblings, direction);
        if !result.is_ok() {
            return Err(self.rejected(result));
        }
        let (moved, neighbor) = mover::swap_with_neighbor(&target, &siblings, direction);
        self.repo.update_all(&[moved, neighbor]).await?;
        Ok(())
    }

    /// Look up the operation target, rejecting with `NOT_EXIST` when it is
    /// gone (e.g. deleted concurrently).
    async fn require(&self, id: DbId) -> FacadeResult<T> {
        let found = self.repo.find_by_id(id).await?;
        let result = self.validator.validate_exists(found.as_ref());
        found.ok_or(FacadeError::Invalid(result))
    }

    fn rejected(&self, result: ValidationResult) -> FacadeError {
        tracing::warn!(entity = self.validator.name(), %result, "validation rejected input");
        FacadeError::Invalid(result)
    }
}
