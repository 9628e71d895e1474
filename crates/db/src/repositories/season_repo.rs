//! Repository for the `seasons` table.

use async_trait::async_trait;
use shelf_core::error::CoreError;
use shelf_core::repository::MovableRepository;
use shelf_core::types::DbId;
use sqlx::PgPool;

use crate::models::season::Season;
use crate::repo_error;

const COLUMNS: &str = "id, position, show_id, number, start_year, end_year, language";

/// PostgreSQL-backed season persistence. Seasons of one show form one
/// sibling list.
pub struct SeasonRepo {
    pool: PgPool,
}

impl SeasonRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovableRepository<Season> for SeasonRepo {
    async fn find_all(&self) -> Result<Vec<Season>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM seasons ORDER BY show_id, position");
        sqlx::query_as::<_, Season>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Season>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM seasons WHERE id = $1");
        sqlx::query_as::<_, Season>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn siblings(&self, entity: &Season) -> Result<Vec<Season>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM seasons WHERE show_id = $1 ORDER BY position");
        sqlx::query_as::<_, Season>(&query)
            .bind(entity.show_id)
            .fetch_all(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn insert(&self, candidate: &Season) -> Result<Season, CoreError> {
        let query = format!(
            "INSERT INTO seasons (position, show_id, number, start_year, end_year, language) \
             VALUES ((SELECT COALESCE(MAX(position) + 1, 0) FROM seasons WHERE show_id = $1), \
                     $1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Season>(&query)
            .bind(candidate.show_id)
            .bind(candidate.number)
            .bind(candidate.start_year)
            .bind(candidate.end_year)
            .bind(&candidate.language)
            .fetch_one(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn update(&self, entity: &Season) -> Result<Season, CoreError> {
        let query = format!(
            "UPDATE seasons SET number = $2, start_year = $3, end_year = $4, language = $5 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Season>(&query)
            .bind(entity.id)
            .bind(entity.number)
            .bind(entity.start_year)
            .bind(entity.end_year)
            .bind(&entity.language)
            .fetch_one(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn update_all(&self, entities: &[Season]) -> Result<(), CoreError> {
        let mut tx = self.pool.begin().await.map_err(repo_error)?;
        for entity in entities {
            sqlx::query("UPDATE seasons SET position = $2 WHERE id = $1")
                .bind(entity.id)
                .bind(entity.position)
                .execute(&mut *tx)
                .await
                .map_err(repo_error)?;
        }
        tx.commit().await.map_err(repo_error)
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM seasons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repo_error)?;
        Ok(result.rows_affected() > 0)
    }
}
