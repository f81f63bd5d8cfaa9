use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::scan_event::repository::ScanEventRepositoryPostgres;

use catalog::client::CatalogClient;
use catalog::open_food_facts::OpenFoodFactsResolver;

use business::application::analytics::daily_stats::GetDailyScanStatsUseCaseImpl;
use business::application::batch::process::ProcessBatchUseCaseImpl;
use business::application::lookup::catalog_resolver::CatalogResolver;
use business::application::lookup::lookup_barcode::LookupBarcodeUseCaseImpl;
use business::domain::lookup::cache::LookupCache;

use crate::api::analytics::routes::AnalyticsApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::scanner::routes::ScannerApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub analytics_api: AnalyticsApi,
    pub health_api: HealthApi,
    pub scanner_api: ScannerApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let scan_event_repository = Arc::new(ScanEventRepositoryPostgres::new(pool));
        let external_resolver = Arc::new(OpenFoodFactsResolver::new(CatalogClient::new(
            config.catalog.base_url.clone(),
            config.catalog.timeout,
        )));
        let cache_store = config.cache.build_store()?;

        // Lookup
        let resolver = Arc::new(CatalogResolver {
            repository: product_repository,
            external: external_resolver,
            scan_events: scan_event_repository.clone(),
            logger: logger.clone(),
        });
        let cache = Arc::new(LookupCache::new(cache_store).with_ttl(config.cache.ttl));
        let lookup_use_case = Arc::new(LookupBarcodeUseCaseImpl {
            resolver,
            cache,
            logger: logger.clone(),
        });

        // Batch
        let batch_use_case = Arc::new(ProcessBatchUseCaseImpl {
            lookup: lookup_use_case.clone(),
            logger: logger.clone(),
        });

        // Analytics
        let daily_stats_use_case = Arc::new(GetDailyScanStatsUseCaseImpl {
            repository: scan_event_repository,
            logger,
        });

        Ok(Self {
            analytics_api: AnalyticsApi::new(daily_stats_use_case),
            health_api: HealthApi::new(lookup_use_case.clone()),
            scanner_api: ScannerApi::new(lookup_use_case, batch_use_case),
        })
    }
}
