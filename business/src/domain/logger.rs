/// Logging port used by use cases and resolvers.
///
/// Messages are plain text; adapters decide level filtering and formatting.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
