//! Season entity model.

use serde::{Deserialize, Serialize};
use shelf_core::movable::Movable;
use shelf_core::types::DbId;
use sqlx::FromRow;

/// A row from the `seasons` table, scoped to its show: seasons of the same
/// show form one sibling list.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Season {
    pub id: Option<DbId>,
    pub position: Option<i32>,
    pub show_id: DbId,
    pub number: i32,
    pub start_year: i32,
    pub end_year: i32,
    pub language: String,
}

impl Movable for Season {
    fn id(&self) -> Option<DbId> {
        self.id
    }

    fn position(&self) -> Option<i32> {
        self.position
    }

    fn scope(&self) -> Option<DbId> {
        Some(self.show_id)
    }

    fn with_position(&self, position: i32) -> Self {
        Self {
            position: Some(position),
            ..self.clone()
        }
    }

    fn with_identity(&self, id: DbId, position: i32) -> Self {
        Self {
            id: Some(id),
            position: Some(position),
            ..self.clone()
        }
    }

    fn as_new(&self) -> Self {
        Self {
            id: None,
            position: None,
            ..self.clone()
        }
    }
}
