//! Connection pool construction.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use shelf_core::error::CoreError;

use crate::repo_error;

/// Build a pool from `DATABASE_URL`, honoring a `.env` file if present.
pub async fn connect() -> Result<PgPool, CoreError> {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL")
        .map_err(|_| CoreError::Internal("DATABASE_URL must be set".to_string()))?;
    PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .map_err(repo_error)
}
