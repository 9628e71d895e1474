//! Show entity model.

use serde::{Deserialize, Serialize};
use shelf_core::movable::Movable;
use shelf_core::types::DbId;
use sqlx::FromRow;

/// A row from the `shows` table. Seasons live in their own table and are
/// scoped to a show.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Show {
    pub id: Option<DbId>,
    pub position: Option<i32>,
    pub name: String,
    pub original_name: String,
    pub genre_ids: Vec<DbId>,
}

impl Movable for Show {
    fn id(&self) -> Option<DbId> {
        self.id
    }

    fn position(&self) -> Option<i32> {
        self.position
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
