/// Errors raised by the local product catalog.
/// Code-style identifiers keep messages translatable.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.database_error")]
    DatabaseError,
}

/// Errors raised by a key-value store adapter.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store.read_failed: {0}")]
    Read(String),
    #[error("store.write_failed: {0}")]
    Write(String),
}
