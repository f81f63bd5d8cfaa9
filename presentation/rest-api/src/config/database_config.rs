use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

/// Initialize the local catalog connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MIGRATIONS_PATH: migrations directory applied on startup (optional)
/// - DATABASE_MAX_CONNECTIONS: pool size (optional, default 5)
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails or a migration fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or_default();
    let db_config = DatabaseConfig::new(db_url).with_max_connections(max_connections);
    let pool = create_postgres_pool(&db_config).await?;

    if let Ok(migrations_path) = env::var("DATABASE_MIGRATIONS_PATH") {
        run_migrations(&pool, &migrations_path).await?;
        tracing::info!("Catalog migrations applied from {}", migrations_path);
    }

    Ok(pool)
}
