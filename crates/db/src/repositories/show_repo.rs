//! Repository for the `shows` table.

use async_trait::async_trait;
use shelf_core::error::CoreError;
use shelf_core::repository::MovableRepository;
use shelf_core::types::DbId;
use sqlx::PgPool;

use crate::models::show::Show;
use crate::repo_error;

const COLUMNS: &str = "id, position, name, original_name, genre_ids";

/// PostgreSQL-backed show persistence.
pub struct ShowRepo {
    pool: PgPool,
}

impl ShowRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovableRepository<Show> for ShowRepo {
    async fn find_all(&self) -> Result<Vec<Show>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM shows ORDER BY position");
        sqlx::query_as::<_, Show>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Show>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM shows WHERE id = $1");
        sqlx::query_as::<_, Show>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn siblings(&self, _entity: &Show) -> Result<Vec<Show>, CoreError> {
        self.find_all().await
    }

    async fn insert(&self, candidate: &Show) -> Result<Show, CoreError> {
        let query = format!(
            "INSERT INTO shows (position, name, original_name, genre_ids) \
             VALUES ((SELECT COALESCE(MAX(position) + 1, 0) FROM shows), $1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(&candidate.name)
            .bind(&candidate.original_name)
            .bind(&candidate.genre_ids)
            .fetch_one(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn update(&self, entity: &Show) -> Result<Show, CoreError> {
        let query = format!(
            "UPDATE shows SET name = $2, original_name = $3, genre_ids = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(entity.id)
            .bind(&entity.name)
            .bind(&entity.original_name)
            .bind(&entity.genre_ids)
            .fetch_one(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn update_all(&self, entities: &[Show]) -> Result<(), CoreError> {
        let mut tx = self.pool.begin().await.map_err(repo_error)?;
        for entity in entities {
            sqlx::query("UPDATE shows SET position = $2 WHERE id = $1")
                .bind(entity.id)
                .bind(entity.position)
                .execute(&mut *tx)
                .await
                .map_err(repo_error)?;
        }
        tx.commit().await.map_err(repo_error)
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM shows WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repo_error)?;
        Ok(result.rows_affected() > 0)
    }
}
