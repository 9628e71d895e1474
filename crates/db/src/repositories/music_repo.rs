//! Repository for the `music` table.

use async_trait::async_trait;
use shelf_core::error::CoreError;
use shelf_core::repository::MovableRepository;
use shelf_core::types::DbId;
use sqlx::PgPool;

use crate::models::music::Music;
use crate::repo_error;

const COLUMNS: &str = "id, position, name, media_count";

/// PostgreSQL-backed music persistence.
pub struct MusicRepo {
    pool: PgPool,
}

impl MusicRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovableRepository<Music> for MusicRepo {
    async fn find_all(&self) -> Result<Vec<Music>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM music ORDER BY position");
        sqlx::query_as::<_, Music>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Music>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM music WHERE id = $1");
        sqlx::query_as::<_, Music>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn siblings(&self, _entity: &Music) -> Result<Vec<Music>, CoreError> {
        self.find_all().await
    }

    async fn insert(&self, candidate: &Music) -> Result<Music, CoreError> {
        let query = format!(
            "INSERT INTO music (position, name, media_count) \
             VALUES ((SELECT COALESCE(MAX(position) + 1, 0) FROM music), $1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Music>(&query)
            .bind(&candidate.name)
            .bind(candidate.media_count)
            .fetch_one(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn update(&self, entity: &Music) -> Result<Music, CoreError> {
        let query = format!(
            "UPDATE music SET name = $2, media_count = $3 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Music>(&query)
            .bind(entity.id)
            .bind(&entity.name)
            .bind(entity.media_count)
            .fetch_one(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn update_all(&self, entities: &[Music]) -> Result<(), CoreError> {
        let mut tx = self.pool.begin().await.map_err(repo_error)?;
        for entity in entities {
            sqlx::query("UPDATE music SET position = $2 WHERE id = $1")
                .bind(entity.id)
                .bind(entity.position)
                .execute(&mut *tx)
                .await
                .map_err(repo_error)?;
        }
        tx.commit().await.map_err(repo_error)
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM music WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repo_error)?;
        Ok(result.rows_affected() > 0)
    }
}
