//! Song entity model.

use serde::{Deserialize, Serialize};
use shelf_core::movable::Movable;
use shelf_core::types::DbId;
use sqlx::FromRow;

/// A row from the `songs` table, scoped to its music entry. `length` is in
/// seconds.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Song {
    pub id: Option<DbId>,
    pub position: Option<i32>,
    pub music_id: DbId,
    pub name: String,
    pub length: i32,
}

impl Movable for Song {
    fn id(&self) -> Option<DbId> {
        self.id
    }

    fn position(&self) -> Option<i32> {
        self.position
    }

    fn scope(&self) -> Option<DbId> {
        Some(self.music_id)
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
