//! Repository for the `games` table.

use async_trait::async_trait;
use shelf_core::error::CoreError;
use shelf_core::repository::MovableRepository;
use shelf_core::types::DbId;
use sqlx::PgPool;

use crate::models::game::Game;
use crate::repo_error;

const COLUMNS: &str = "id, position, name, media_count";

/// PostgreSQL-backed game persistence.
pub struct GameRepo {
    pool: PgPool,
}

impl GameRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovableRepository<Game> for GameRepo {
    async fn find_all(&self) -> Result<Vec<Game>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM games ORDER BY position");
        sqlx::query_as::<_, Game>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Game>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn siblings(&self, _entity: &Game) -> Result<Vec<Game>, CoreError> {
        self.find_all().await
    }

    async fn insert(&self, candidate: &Game) -> Result<Game, CoreError> {
        let query = format!(
            "INSERT INTO games (position, name, media_count) \
             VALUES ((SELECT COALESCE(MAX(position) + 1, 0) FROM games), $1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(&candidate.name)
            .bind(candidate.media_count)
            .fetch_one(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn update(&self, entity: &Game) -> Result<Game, CoreError> {
        let query = format!(
            "UPDATE games SET name = $2, media_count = $3 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(entity.id)
            .bind(&entity.name)
            .bind(entity.media_count)
            .fetch_one(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn update_all(&self, entities: &[Game]) -> Result<(), CoreError> {
        let mut tx = self.pool.begin().await.map_err(repo_error)?;
        for entity in entities {
            sqlx::query("UPDATE games SET position = $2 WHERE id = $1")
                .bind(entity.id)
                .bind(entity.position)
                .execute(&mut *tx)
                .await
                .map_err(repo_error)?;
        }
        tx.commit().await.map_err(repo_error)
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repo_error)?;
        Ok(result.rows_affected() > 0)
    }
}
