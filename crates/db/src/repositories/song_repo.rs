//! Repository for the `songs` table.

use async_trait::async_trait;
use shelf_core::error::CoreError;
use shelf_core::repository::MovableRepository;
use shelf_core::types::DbId;
use sqlx::PgPool;

use crate::models::song::Song;
use crate::repo_error;

const COLUMNS: &str = "id, position, music_id, name, length";

/// PostgreSQL-backed song persistence. Songs of one music entry form one
/// sibling list.
pub struct SongRepo {
    pool: PgPool,
}

impl SongRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovableRepository<Song> for SongRepo {
    async fn find_all(&self) -> Result<Vec<Song>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM songs ORDER BY music_id, position");
        sqlx::query_as::<_, Song>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Song>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM songs WHERE id = $1");
        sqlx::query_as::<_, Song>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn siblings(&self, entity: &Song) -> Result<Vec<Song>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM songs WHERE music_id = $1 ORDER BY position");
        sqlx::query_as::<_, Song>(&query)
            .bind(entity.music_id)
            .fetch_all(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn insert(&self, candidate: &Song) -> Result<Song, CoreError> {
        let query = format!(
            "INSERT INTO songs (position, music_id, name, length) \
             VALUES ((SELECT COALESCE(MAX(position) + 1, 0) FROM songs WHERE music_id = $1), \
                     $1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Song>(&query)
            .bind(candidate.music_id)
            .bind(&candidate.name)
            .bind(candidate.length)
            .fetch_one(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn update(&self, entity: &Song) -> Result<Song, CoreError> {
        let query = format!(
            "UPDATE songs SET name = $2, length = $3 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Song>(&query)
            .bind(entity.id)
            .bind(&entity.name)
            .bind(entity.length)
            .fetch_one(&self.pool)
            .await
            .map_err(repo_error)
    }

    async fn update_all(&self, entities: &[Song]) -> Result<(), CoreError> {
        let mut tx = self.pool.begin().await.map_err(repo_error)?;
        for entity in entities {
            sqlx::query("UPDATE songs SET position = $2 WHERE id = $1")
                .bind(entity.id)
                .bind(entity.position)
                .execute(&mut *tx)
                .await
                .map_err(repo_error)?;
        }
        tx.commit().await.map_err(repo_error)
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM songs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repo_error)?;
        Ok(result.rows_affected() > 0)
    }
}
