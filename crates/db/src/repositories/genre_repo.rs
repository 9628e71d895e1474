//! Repository for the `genres` table.

use async_trait::async_trait;
use shelf_core::error::CoreError;
use shelf_core::repository::MovableRepository;
use shelf_core::types::DbId;
use sqlx::PgPool;

use crate::models::genre::Genre;
use crate::repo_error;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, position, name";

/// PostgreSQL-backed genre persistence.
pub struct GenreRepo {
    pool: PgPool,
}

impl GenreRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovableRepository<Genre> for GenreRepo {
    async fn find_all(&self) -> Result<Vec<Genre>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM genres ORDER BY position");
        sqlx::query_as::<_, Genre>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Genre>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE id = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn siblings(&self, _entity: &Genre) -> Result<Vec<Genre>, CoreError> {
        self.find_all().await
    }

    async fn insert(&self, candidate: &Genre) -> Result<Genre, CoreError> {
        let query = format!(
            "INSERT INTO genres (position, name) \
             VALUES ((SELECT COALESCE(MAX(position) + 1, 0) FROM genres), $1) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(&candidate.name)
            .fetch_one(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn update(&self, entity: &Genre) -> Result<Genre, CoreError> {
        let query = format!("UPDATE genres SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Genre>(&query)
            .bind(entity.id)
            .bind(&entity.name)
            .fetch_one(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn update_all(&self, entities: &[Genre]) -> Result<(), CoreError> {
        let mut tx = self.pool.begin().await.map_err(repo_error)?;
        for entity in entities {
            sqlx::query("UPDATE genres SET position = $2 WHERE id = $1")
                .bind(entity.id)
                .bind(entity.position)
                .execute(&mut *tx)
                .await
                .map_err(repo_error)?;
        }
        tx.commit().await.map_err(repo_error)
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repo_error)?;
        Ok(result.rows_affected() > 0)
    }
}
