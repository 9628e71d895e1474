//! Repository for the `movies` table.

use async_trait::async_trait;
use shelf_core::error::CoreError;
use shelf_core::repository::MovableRepository;
use shelf_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::Movie;
use crate::repo_error;

const COLUMNS: &str = "id, position, name, original_name, year, language, media, genre_ids";

/// PostgreSQL-backed movie persistence.
pub struct MovieRepo {
    pool: PgPool,
}

impl MovieRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovableRepository<Movie> for MovieRepo {
    async fn find_all(&self) -> Result<Vec<Movie>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY position");
        sqlx::query_as::<_, Movie>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn siblings(&self, _entity: &Movie) -> Result<Vec<Movie>, CoreError> {
        self.find_all().await
    }

    async fn insert(&self, candidate: &Movie) -> Result<Movie, CoreError> {
        let query = format!(
            "INSERT INTO movies (position, name, original_name, year, language, media, genre_ids) \
             VALUES ((SELECT COALESCE(MAX(position) + 1, 0) FROM movies), $1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&candidate.name)
            .bind(&candidate.original_name)
            .bind(candidate.year)
            .bind(&candidate.language)
            .bind(&candidate.media)
            .bind(&candidate.genre_ids)
            .fetch_one(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn update(&self, entity: &Movie) -> Result<Movie, CoreError> {
        let query = format!(
            "UPDATE movies SET \
                name = $2, \
                original_name = $3, \
                year = $4, \
                language = $5, \
                media = $6, \
                genre_ids = $7 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(entity.id)
            .bind(&entity.name)
            .bind(&entity.original_name)
            .bind(entity.year)
            .bind(&entity.language)
            .bind(&entity.media)
            .bind(&entity.genre_ids)
            .fetch_one(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn update_all(&self, entities: &[Movie]) -> Result<(), CoreError> {
        let mut tx = self.pool.begin().await.map_err(repo_error)?;
        for entity in entities {
            sqlx::query("UPDATE movies SET position = $2 WHERE id = $1")
                .bind(entity.id)
                .bind(entity.position)
                .execute(&mut *tx)
                .await
                .map_err(repo_error)?;
        }
        tx.commit().await.map_err(repo_error)
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repo_error)?;
        Ok(result.rows_affected() > 0)
    }
}
