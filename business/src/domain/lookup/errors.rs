use crate::domain::errors::{RepositoryError, StoreError};

/// Failure classes of a single barcode lookup.
///
/// Lookups report these as failed [`LookupResult`](super::model::LookupResult)
/// records rather than returning them to callers.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Malformed length or bad checksum. Never retried, never cached.
    #[error("{0}")]
    Validation(String),
    /// The resolver completed without a match. Never cached.
    #[error("{0}")]
    NotFound(String),
    /// The resolver failed and no cached entry could stand in.
    #[error("{0}")]
    Network(String),
}

/// Errors a resolver adapter can raise instead of answering.
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    Catalog(#[from] RepositoryError),
}

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache.store: {0}")]
    Store(#[from] StoreError),
    #[error("cache.serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}
