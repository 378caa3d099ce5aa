//! Postgres connection pool and schema bootstrap.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;
use unsacad_config::DatabaseConfig;
use unsacad_kernel::AppResult;

const SCHEMA: &str = include_str!("schema.sql");

/// Creates a connection pool from the database configuration.
pub async fn create_pool(config: &DatabaseConfig) -> AppResult<PgPool> {
    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.connect_timeout())
        .idle_timeout(config.idle_timeout())
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "database pool created"
    );
    Ok(pool)
}

/// Applies the schema, creating missing tables and indexes.
///
/// Idempotent: every statement is `IF NOT EXISTS`.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    info!("database schema is up to date");
    Ok(())
}
