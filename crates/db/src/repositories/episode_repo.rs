//! Repository for the `episodes` table.

use async_trait::async_trait;
use shelf_core::error::CoreError;
use shelf_core::repository::MovableRepository;
use shelf_core::types::DbId;
use sqlx::PgPool;

use crate::models::episode::Episode;
use crate::repo_error;

const COLUMNS: &str = "id, position, season_id, number, name, length";

/// PostgreSQL-backed episode persistence. Episodes of one season form one
/// sibling list.
pub struct EpisodeRepo {
    pool: PgPool,
}

impl EpisodeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovableRepository<Episode> for EpisodeRepo {
    async fn find_all(&self) -> Result<Vec<Episode>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM episodes ORDER BY season_id, position");
        sqlx::query_as::<_, Episode>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Episode>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM episodes WHERE id = $1");
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn siblings(&self, entity: &Episode) -> Result<Vec<Episode>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM episodes WHERE season_id = $1 ORDER BY position");
        sqlx::query_as::<_, Episode>(&query)
            .bind(entity.season_id)
            .fetch_all(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn insert(&self, candidate: &Episode) -> Result<Episode, CoreError> {
        let query = format!(
            "INSERT INTO episodes (position, season_id, number, name, length) \
             VALUES ((SELECT COALESCE(MAX(position) + 1, 0) FROM episodes WHERE season_id = $1), \
                     $1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(candidate.season_id)
            .bind(candidate.number)
            .bind(&candidate.name)
            .bind(candidate.length)
            .fetch_one(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn update(&self, entity: &Episode) -> Result<Episode, CoreError> {
        let query = format!(
            "UPDATE episodes SET number = $2, name = $3, length = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(entity.id)
            .bind(entity.number)
            .bind(&entity.name)
            .bind(entity.length)
            .fetch_one(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn update_all(&self, entities: &[Episode]) -> Result<(), CoreError> {
        let mut tx = self.pool.begin().await.map_err(repo_error)?;
        for entity in entities {
            sqlx::query("UPDATE episodes SET position = $2 WHERE id = $1")
                .bind(entity.id)
                .bind(entity.position)
                .execute(&mut *tx)
                .await
                .map_err(repo_error)?;
        }
        tx.commit().await.map_err(repo_error)
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM episodes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repo_error)?;
        Ok(result.rows_affected() > 0)
    }
}
