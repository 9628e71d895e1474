//! Repository for the `pictures` table.

use async_trait::async_trait;
use shelf_core::error::CoreError;
use shelf_core::repository::MovableRepository;
use shelf_core::types::DbId;
use sqlx::PgPool;

use crate::models::picture::Picture;
use crate::repo_error;

const COLUMNS: &str = "id, position, content";

/// PostgreSQL-backed picture persistence.
pub struct PictureRepo {
    pool: PgPool,
}

impl PictureRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovableRepository<Picture> for PictureRepo {
    async fn find_all(&self) -> Result<Vec<Picture>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM pictures ORDER BY position");
        sqlx::query_as::<_, Picture>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Picture>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM pictures WHERE id = $1");
        sqlx::query_as::<_, Picture>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn siblings(&self, _entity: &Picture) -> Result<Vec<Picture>, CoreError> {
        self.find_all().await
    }

    async fn insert(&self, candidate: &Picture) -> Result<Picture, CoreError> {
        let query = format!(
            "INSERT INTO pictures (position, content) \
             VALUES ((SELECT COALESCE(MAX(position) + 1, 0) FROM pictures), $1) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Picture>(&query)
            .bind(&candidate.content)
            .fetch_one(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn update(&self, entity: &Picture) -> Result<Picture, CoreError> {
        let query = format!("UPDATE pictures SET content = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Picture>(&query)
            .bind(entity.id)
            .bind(&entity.content)
            .fetch_one(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn update_all(&self, entities: &[Picture]) -> Result<(), CoreError> {
        let mut tx = self.pool.begin().await.map_err(repo_error)?;
        for entity in entities {
            sqlx::query("UPDATE pictures SET position = $2 WHERE id = $1")
                .bind(entity.id)
                .bind(entity.position)
                .execute(&mut *tx)
                .await
                .map_err(repo_error)?;
        }
        tx.commit().await.map_err(repo_error)
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM pictures WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repo_error)?;
        Ok(result.rows_affected() > 0)
    }
}
