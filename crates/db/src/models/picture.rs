//! Picture entity model.

use serde::{Deserialize, Serialize};
use shelf_core::movable::Movable;
use shelf_core::types::DbId;
use sqlx::FromRow;

/// A row from the `pictures` table. `content` holds the raw image bytes.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Picture {
    pub id: Option<DbId>,
    pub position: Option<i32>,
    pub content: Vec<u8>,
}

impl Movable for Picture {
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
