//! File-backed key/value storage.
//!
//! Each key is stored as `<dir>/<key>.json`, replaced atomically on write.

use std::path::{Path, PathBuf};

use openclaw_core::error::Result;
use openclaw_core::storage::{KeyValueStorage, validate_key};

use crate::storage::atomic_file::AtomicFile;

/// `KeyValueStorage` over a directory of small files.
#[derive(Debug, Clone)]
pub struct FileKeyValueStorage {
    dir: PathBuf,
}

impl FileKeyValueStorage {
    /// Creates a storage rooted at `dir`. The directory is created lazily on
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_for(&self, key: &str) -> Result<AtomicFile> {
        validate_key(key)?;
        Ok(AtomicFile::new(self.dir.join(format!("{}.json", key))))
    }
}

impl KeyValueStorage for FileKeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.file_for(key)?.read()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let file = self.file_for(key)?;
        file.write(value)?;
        tracing::debug!("[Storage] wrote {} ({} bytes)", file.path().display(), value.len());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let file = self.file_for(key)?;
        file.remove()?;
        tracing::debug!("[Storage] removed {}", file.path().display());
        Ok(())
    }
}
