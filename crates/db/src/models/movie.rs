//! Movie entity model.

use serde::{Deserialize, Serialize};
use shelf_core::movable::Movable;
use shelf_core::types::DbId;
use sqlx::FromRow;

/// A row from the `movies` table.
///
/// `media` holds the length of each medium in minutes (multi-disc releases
/// have several entries). `genre_ids` references rows in `genres`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Movie {
    pub id: Option<DbId>,
    pub position: Option<i32>,
    pub name: String,
    pub original_name: String,
    pub year: i32,
    pub language: String,
    pub media: Vec<i32>,
    pub genre_ids: Vec<DbId>,
}

impl Movable for Movie {
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
