use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Scanner logs default to `info`; `RUST_LOG` overrides, e.g. `scanner=debug`
/// to trace every cache decision.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenv().ok();

    let config = AppConfig::from_env();
    tracing::info!(
        catalog = %config.catalog.base_url,
        cache_ttl_secs = config.cache.ttl.num_seconds(),
        "Starting barcode scanner service"
    );

    // Products and scan events share one pool
    let pool = database_config::init_database().await?;
    let container = DependencyContainer::new(pool, &config)?;

    Server::run(config, container).await
}
