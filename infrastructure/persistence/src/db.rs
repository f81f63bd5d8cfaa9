//! Connection and schema setup for the scanner database: the `products`
//! catalog and the `barcode_scan_events` log.

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }

    /// Pool size; zero keeps the default since an empty pool can never serve a scan.
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        if max_connections > 0 {
            self.max_connections = max_connections;
        }
        self
    }
}

pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|err| {
            tracing::error!("Failed to connect to scanner database: {}", err);
            DatabaseError::ConnectionError
        })
}

/// Applies the migrations in `migrations_path` (products, then scan events).
/// A missing directory is an error rather than a silent no-op.
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);
    if !path.is_dir() {
        tracing::error!("Migrations directory not found: {}", migrations_path);
        return Err(DatabaseError::MigrationError);
    }

    let migrator = sqlx::migrate::Migrator::new(path).await.map_err(|err| {
        tracing::error!("Unreadable migrations in {}: {}", migrations_path, err);
        DatabaseError::MigrationError
    })?;
    tracing::info!("Applying {} scanner migrations", migrator.iter().count());

    migrator.run(pool).await.map_err(|err| {
        tracing::error!("Scanner migration failed: {}", err);
        DatabaseError::MigrationError
    })
}
