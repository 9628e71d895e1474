//! PostgreSQL persistence for the catalog backend.
//!
//! One model and one repository per entity; every repository implements
//! [`shelf_core::repository::MovableRepository`] so the facade layer stays
//! agnostic of the store.

pub mod models;
pub mod pool;
pub mod repositories;

use shelf_core::error::CoreError;

/// Map a driver error into the shared repository error.
pub(crate) fn repo_error(err: sqlx::Error) -> CoreError {
    CoreError::Repository(err.to_string())
}
