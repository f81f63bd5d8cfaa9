use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::barcode::validator::validate_barcode;
use crate::domain::logger::Logger;
use crate::domain::lookup::cache::LookupCache;
use crate::domain::lookup::errors::{CacheError, LookupError, ResolverError};
use crate::domain::lookup::model::LookupResult;
use crate::domain::lookup::services::ProductResolver;
use crate::domain::lookup::use_cases::lookup::{LookupBarcodeParams, LookupBarcodeUseCase};

const NOT_FOUND_MESSAGE: &str = "Product not found";
const LOOKUP_FAILED_MESSAGE: &str = "Failed to lookup barcode";

pub struct LookupBarcodeUseCaseImpl {
    pub resolver: Arc<dyn ProductResolver>,
    pub cache: Arc<LookupCache>,
    pub logger: Arc<dyn Logger>,
}

impl LookupBarcodeUseCaseImpl {
    async fn lookup(&self, raw: &str) -> Result<LookupResult, LookupError> {
        let validation = validate_barcode(raw);
        if !validation.is_valid {
            let message = validation
                .error
                .unwrap_or_else(|| "Invalid barcode".to_string());
            self.logger
                .debug(&format!("Rejected barcode {:?}: {}", raw, message));
            return Err(LookupError::Validation(message));
        }

        let key = validation
            .normalized_barcode
            .unwrap_or_else(|| raw.to_string());

        if let Some(cached) = self.cache.get(&key) {
            self.logger.debug(&format!("Cache hit for barcode: {}", key));
            return Ok(cached);
        }

        self.logger
            .info(&format!("Resolving barcode: {}", key));

        match self.resolver.resolve(&key).await {
            Ok(result) if result.success && result.product.is_some() => {
                if let Err(err) = self.cache.put(&key, &result) {
                    self.logger
                        .warn(&format!("Could not cache barcode {}: {}", key, err));
                }
                self.logger.info(&format!(
                    "Barcode {} resolved to: {}",
                    key,
                    result.product_name().unwrap_or_default()
                ));
                Ok(result)
            }
            Ok(result) => {
                self.logger
                    .info(&format!("Barcode not found: {}", key));
                Err(LookupError::NotFound(
                    result
                        .error
                        .unwrap_or_else(|| NOT_FOUND_MESSAGE.to_string()),
                ))
            }
            Err(err) => {
                self.logger
                    .warn(&format!("Resolver failed for barcode {}: {}", key, err));

                if let Some(cached) = self.cache.get(&key) {
                    self.logger
                        .info(&format!("Serving cached result for barcode: {}", key));
                    return Ok(cached);
                }

                let message = match err {
                    ResolverError::Network(message) if !message.trim().is_empty() => message,
                    _ => LOOKUP_FAILED_MESSAGE.to_string(),
                };
                Err(LookupError::Network(message))
            }
        }
    }
}

#[async_trait]
impl LookupBarcodeUseCase for LookupBarcodeUseCaseImpl {
    async fn execute(&self, params: LookupBarcodeParams) -> LookupResult {
        match self.lookup(&params.barcode).await {
            Ok(result) => result,
            Err(err) => LookupResult::failed(err.to_string()),
        }
    }

    fn clear_cache(&self) -> Result<(), CacheError> {
        self.cache.clear()?;
        self.logger.info("Barcode lookup cache cleared");
        Ok(())
    }

    fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{RepositoryError, StoreError};
    use crate::domain::lookup::cache::CACHE_STORAGE_KEY;
    use crate::domain::lookup::model::CacheEntry;
    use crate::domain::lookup::store::KeyValueStore;
    use crate::domain::product::model::Product;
    use crate::domain::product::value_objects::ProductSource;
    use chrono::{Duration, Utc};
    use mockall::mock;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    mock! {
        pub Resolver {}

        #[async_trait]
        impl ProductResolver for Resolver {
            async fn resolve(&self, barcode: &str) -> Result<LookupResult, ResolverError>;
        }
    }

    mock! {
        pub Store {}

        impl KeyValueStore for Store {
            fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
            fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
            fn remove(&self, key: &str) -> Result<(), StoreError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        blobs: Mutex<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.blobs.lock().unwrap().get(key).cloned())
        }
        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.blobs
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
        fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.blobs.lock().unwrap().remove(key);
            Ok(())
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn coca_cola() -> Product {
        Product {
            id: "17".to_string(),
            name: "Coca Cola".to_string(),
            price: 1.99,
            barcode: "5449000000996".to_string(),
            stock_quantity: 18,
            description: Some("Soft drink".to_string()),
            min_stock_level: Some(5),
            source: ProductSource::LocalDatabase,
        }
    }

    fn memory_cache() -> Arc<LookupCache> {
        Arc::new(LookupCache::new(Arc::new(MemoryStore::default())))
    }

    fn use_case(resolver: MockResolver, cache: Arc<LookupCache>) -> LookupBarcodeUseCaseImpl {
        LookupBarcodeUseCaseImpl {
            resolver: Arc::new(resolver),
            cache,
            logger: mock_logger(),
        }
    }

    fn lookup(barcode: &str) -> LookupBarcodeParams {
        LookupBarcodeParams {
            barcode: barcode.to_string(),
        }
    }

    #[tokio::test]
    async fn should_reject_invalid_barcode_without_resolving() {
        let mut resolver = MockResolver::new();
        resolver.expect_resolve().times(0);
        let use_case = use_case(resolver, memory_cache());

        let result = use_case.execute(lookup("5449000000997")).await;

        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Invalid EAN-13 checksum"));
    }

    #[tokio::test]
    async fn should_resolve_with_normalized_barcode() {
        let mut resolver = MockResolver::new();
        resolver
            .expect_resolve()
            .withf(|barcode| barcode == "5449000000996")
            .times(1)
            .returning(|_| Ok(LookupResult::found(coca_cola())));
        let use_case = use_case(resolver, memory_cache());

        let result = use_case.execute(lookup("5449-0000-00996")).await;

        assert!(result.success);
        assert_eq!(result.product_name(), Some("Coca Cola"));
    }

    #[tokio::test]
    async fn should_serve_second_lookup_from_cache() {
        let mut resolver = MockResolver::new();
        resolver
            .expect_resolve()
            .times(1)
            .returning(|_| Ok(LookupResult::found(coca_cola())));
        let cache = memory_cache();
        let use_case = use_case(resolver, cache.clone());

        let first = use_case.execute(lookup("5449000000996")).await;
        let second = use_case.execute(lookup("5449000000996")).await;

        assert_eq!(first, second);
        assert_eq!(
            second.product.map(|p| p.source),
            Some(ProductSource::LocalDatabase)
        );
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn should_return_cached_product_when_resolver_later_fails() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut resolver = MockResolver::new();
        resolver.expect_resolve().returning(move |_| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(LookupResult::found(coca_cola()))
            } else {
                Err(ResolverError::Network("Network error".to_string()))
            }
        });
        let use_case = use_case(resolver, memory_cache());

        let first = use_case.execute(lookup("5449000000996")).await;
        let second = use_case.execute(lookup("5449000000996")).await;

        assert!(first.success);
        assert!(second.success);
        assert_eq!(second.product_name(), Some("Coca Cola"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_not_cache_not_found_results() {
        let mut resolver = MockResolver::new();
        resolver
            .expect_resolve()
            .times(2)
            .returning(|_| Ok(LookupResult::failed("Product not found in database")));
        let cache = memory_cache();
        let use_case = use_case(resolver, cache.clone());

        let first = use_case.execute(lookup("0000000000000")).await;
        let second = use_case.execute(lookup("0000000000000")).await;

        assert!(!first.success);
        assert_eq!(second.error.as_deref(), Some("Product not found in database"));
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn should_use_default_message_when_not_found_without_reason() {
        let mut resolver = MockResolver::new();
        resolver.expect_resolve().returning(|_| {
            Ok(LookupResult {
                success: false,
                product: None,
                error: None,
            })
        });
        let use_case = use_case(resolver, memory_cache());

        let result = use_case.execute(lookup("96385074")).await;

        assert_eq!(result.error.as_deref(), Some("Product not found"));
    }

    #[tokio::test]
    async fn should_fall_back_to_cache_written_during_failed_resolve() {
        let cache = memory_cache();
        let other_session = cache.clone();
        let mut resolver = MockResolver::new();
        resolver.expect_resolve().times(1).returning(move |barcode| {
            other_session
                .put(barcode, &LookupResult::found(coca_cola()))
                .unwrap();
            Err(ResolverError::Network("Network error".to_string()))
        });
        let use_case = use_case(resolver, cache);

        let result = use_case.execute(lookup("5449000000996")).await;

        assert!(result.success);
        assert_eq!(result.product_name(), Some("Coca Cola"));
    }

    #[tokio::test]
    async fn should_surface_network_error_when_nothing_cached() {
        let mut resolver = MockResolver::new();
        resolver
            .expect_resolve()
            .returning(|_| Err(ResolverError::Network("External product database unavailable".to_string())));
        let use_case = use_case(resolver, memory_cache());

        let result = use_case.execute(lookup("5449000000996")).await;

        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("External product database unavailable")
        );
    }

    #[tokio::test]
    async fn should_use_generic_message_when_failure_is_blank() {
        let mut resolver = MockResolver::new();
        resolver
            .expect_resolve()
            .returning(|_| Err(ResolverError::Network(String::new())));
        let use_case = use_case(resolver, memory_cache());

        let result = use_case.execute(lookup("5449000000996")).await;

        assert_eq!(result.error.as_deref(), Some("Failed to lookup barcode"));
    }

    #[tokio::test]
    async fn should_hide_local_catalog_error_codes() {
        let mut resolver = MockResolver::new();
        resolver
            .expect_resolve()
            .returning(|_| Err(ResolverError::Catalog(RepositoryError::DatabaseError)));
        let use_case = use_case(resolver, memory_cache());

        let result = use_case.execute(lookup("5449000000996")).await;

        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Failed to lookup barcode"));
    }

    #[tokio::test]
    async fn should_resolve_again_when_cached_entry_expired() {
        let store = Arc::new(MemoryStore::default());
        let mut entries = HashMap::new();
        entries.insert(
            "5449000000996".to_string(),
            CacheEntry {
                result: LookupResult::found(coca_cola()),
                timestamp: Utc::now().timestamp_millis() - Duration::hours(25).num_milliseconds(),
            },
        );
        store
            .set(CACHE_STORAGE_KEY, &serde_json::to_string(&entries).unwrap())
            .unwrap();
        let mut resolver = MockResolver::new();
        resolver
            .expect_resolve()
            .times(1)
            .returning(|_| Ok(LookupResult::found(coca_cola())));
        let use_case = use_case(resolver, Arc::new(LookupCache::new(store)));

        let result = use_case.execute(lookup("5449000000996")).await;

        assert!(result.success);
    }

    #[tokio::test]
    async fn should_still_succeed_when_cache_write_fails() {
        let mut store = MockStore::new();
        store.expect_get().returning(|_| Ok(None));
        store
            .expect_set()
            .returning(|_, _| Err(StoreError::Write("quota exceeded".to_string())));
        let mut resolver = MockResolver::new();
        resolver
            .expect_resolve()
            .returning(|_| Ok(LookupResult::found(coca_cola())));
        let use_case = use_case(resolver, Arc::new(LookupCache::new(Arc::new(store))));

        let result = use_case.execute(lookup("5449000000996")).await;

        assert!(result.success);
    }

    #[tokio::test]
    async fn should_resolve_again_after_cache_cleared() {
        let mut resolver = MockResolver::new();
        resolver
            .expect_resolve()
            .times(2)
            .returning(|_| Ok(LookupResult::found(coca_cola())));
        let use_case = use_case(resolver, memory_cache());

        use_case.execute(lookup("5449000000996")).await;
        use_case.clear_cache().unwrap();
        use_case.execute(lookup("5449000000996")).await;

        assert_eq!(use_case.cached_entries(), 1);
    }
}
