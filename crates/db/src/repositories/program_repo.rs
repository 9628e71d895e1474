//! Repository for the `programs` table.

use async_trait::async_trait;
use shelf_core::error::CoreError;
use shelf_core::repository::MovableRepository;
use shelf_core::types::DbId;
use sqlx::PgPool;

use crate::models::program::Program;
use crate::repo_error;

const COLUMNS: &str = "id, position, name, media_count";

/// PostgreSQL-backed program persistence.
pub struct ProgramRepo {
    pool: PgPool,
}

impl ProgramRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovableRepository<Program> for ProgramRepo {
    async fn find_all(&self) -> Result<Vec<Program>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM programs ORDER BY position");
        sqlx::query_as::<_, Program>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Program>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM programs WHERE id = $1");
        sqlx::query_as::<_, Program>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn siblings(&self, _entity: &Program) -> Result<Vec<Program>, CoreError> {
        self.find_all().await
    }

    async fn insert(&self, candidate: &Program) -> Result<Program, CoreError> {
        let query = format!(
            "INSERT INTO programs (position, name, media_count) \
             VALUES ((SELECT COALESCE(MAX(position) + 1, 0) FROM programs), $1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Program>(&query)
            .bind(&candidate.name)
            .bind(candidate.media_count)
            .fetch_one(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn update(&self, entity: &Program) -> Result<Program, CoreError> {
        let query = format!(
            "UPDATE programs SET name = $2, media_count = $3 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Program>(&query)
            .bind(entity.id)
            .bind(&entity.name)
            .bind(entity.media_count)
            .fetch_one(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn update_all(&self, entities: &[Program]) -> Result<(), CoreError> {
        let mut tx = self.pool.begin().await.map_err(repo_error)?;
        for entity in entities {
            sqlx::query("UPDATE programs SET position = $2 WHERE id = $1")
                .bind(entity.id)
                .bind(entity.position)
                .execute(&mut *tx)
                .await
                .map_err(repo_error)?;
        }
        tx.commit().await.map_err(repo_error)
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM programs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repo_error)?;
        Ok(result.rows_affected() > 0)
    }
}
