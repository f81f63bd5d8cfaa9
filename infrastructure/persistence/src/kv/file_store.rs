use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use business::domain::errors::StoreError;
use business::domain::lookup::store::KeyValueStore;

/// Durable store keeping one `<key>.json` file per key under a directory.
///
/// Writes go to a unique temp file that is renamed over the target, so a
/// reader never observes a half-written value.
pub struct FileKeyValueStore {
    dir: PathBuf,
    tmp_counter: AtomicU64,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|err| StoreError::Write(format!("{}: {}", dir.display(), err)))?;

        Ok(Self {
            dir,
            tmp_counter: AtomicU64::new(0),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolves `key` to its file; rejected keys are reported through `fail`
    /// so the error matches the calling operation.
    fn path_for(&self, key: &str, fail: fn(String) -> StoreError) -> Result<PathBuf, StoreError> {
        let allowed = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.';
        if key.is_empty() || key.starts_with('.') || !key.chars().all(allowed) {
            return Err(fail(format!("invalid key {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }

    fn tmp_path_for(&self, target: &Path) -> PathBuf {
        let seq = self.tmp_counter.fetch_add(1, Ordering::Relaxed);
        let mut name = target
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".{}.{}.tmp", std::process::id(), seq));
        target.with_file_name(name)
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key, StoreError::Read)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Read(format!("{}: {}", path.display(), err))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key, StoreError::Write)?;
        let temp = self.tmp_path_for(&path);
        let write_err = |err: std::io::Error| StoreError::Write(format!("{}: {}", path.display(), err));

        {
            let mut file = fs::OpenOptions::new()
                .create_new(true)
                .write(true)
                .open(&temp)
                .map_err(write_err)?;
            file.write_all(value.as_bytes()).map_err(write_err)?;
            file.sync_all().map_err(write_err)?;
        }

        if let Err(err) = fs::rename(&temp, &path) {
            let _ = fs::remove_file(&temp);
            return Err(write_err(err));
        }

        tracing::debug!(path = %path.display(), "Store value saved");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key, StoreError::Write)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Write(format!("{}: {}", path.display(), err))),
        }
    }
}
