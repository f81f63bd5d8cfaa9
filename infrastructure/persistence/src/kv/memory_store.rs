use std::collections::HashMap;
use std::sync::RwLock;

use business::domain::errors::StoreError;
use business::domain::lookup::store::KeyValueStore;

/// Process-local store; contents are lost on restart.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self
            .values
            .read()
            .map_err(|err| StoreError::Read(err.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self
            .values
            .write()
            .map_err(|err| StoreError::Write(err.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut values = self
            .values
            .write()
            .map_err(|err| StoreError::Write(err.to_string()))?;
        values.remove(key);
        Ok(())
    }
}
