//! Atomic text file operations.
//!
//! Provides a thin layer for safe concurrent access to small state files.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use openclaw_core::error::{ConsoleError, Result};

/// A handle to a text file that is replaced atomically on every write.
///
/// Provides:
/// - **Atomicity**: writes go to a temp file that is renamed over the target
/// - **Isolation**: an exclusive lock file serializes writers
/// - **Durability**: explicit fsync before rename
pub struct AtomicFile {
    path: PathBuf,
}

impl AtomicFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(String))`: file exists and has non-blank content
    /// - `Ok(None)`: file doesn't exist or is blank
    /// - `Err`: the file could not be read
    pub fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(content))
    }

    /// Replaces the file content under an exclusive lock.
    pub fn write(&self, content: &str) -> Result<()> {
        let _lock = FileLock::acquire(&self.path)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(content.as_bytes())?;

        // Ensure data is written to disk
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Deletes the file. A missing file is not an error.
    pub fn remove(&self) -> Result<()> {
        let _lock = FileLock::acquire(&self.path)?;

        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| ConsoleError::io("Path has no parent directory"))?;

        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| ConsoleError::io("Path has no file name"))?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }
}

/// A file lock guard that releases the lock when dropped.
///
/// The lock file itself stays on disk. Deleting it would let a later writer
/// lock a fresh inode while another still waits on the old one.
struct FileLock {
    _file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()
            .map_err(|e| ConsoleError::storage(format!("Failed to acquire lock: {}", e)))?;

        Ok(FileLock { _file: file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicFile::new(temp_dir.path().join("state.json"));

        file.write("{\"a\":1}").unwrap();
        assert_eq!(file.read().unwrap().as_deref(), Some("{\"a\":1}"));

        file.write("{\"a\":2}").unwrap();
        assert_eq!(file.read().unwrap().as_deref(), Some("{\"a\":2}"));
    }

    #[test]
    fn test_read_missing_and_blank() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicFile::new(temp_dir.path().join("state.json"));
        assert!(file.read().unwrap().is_none());

        fs::write(file.path(), "  \n").unwrap();
        assert!(file.read().unwrap().is_none());
    }

    #[test]
    fn test_no_temp_file_after_write() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicFile::new(temp_dir.path().join("state.json"));
        file.write("x").unwrap();

        assert!(!temp_dir.path().join(".state.json.tmp").exists());
        // The lock file is reused by later writers.
        assert!(temp_dir.path().join("state.lock").exists());
        assert!(file.path().exists());
    }

    #[test]
    fn test_concurrent_writers_all_succeed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");

        let handles: Vec<_> = (0..8)
            .map(|writer| {
                let path = path.clone();
                std::thread::spawn(move || {
                    (0..50)
                        .filter_map(|i| {
                            AtomicFile::new(path.clone())
                                .write(&format!("{{\"writer\":{},\"i\":{}}}", writer, i))
                                .err()
                        })
                        .count()
                })
            })
            .collect();

        let failures: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(failures, 0);

        let content = AtomicFile::new(path).read().unwrap().unwrap();
        assert!(content.starts_with("{\"writer\":"));
        assert!(!temp_dir.path().join(".state.json.tmp").exists());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicFile::new(temp_dir.path().join("state.json"));
        file.write("x").unwrap();

        file.remove().unwrap();
        assert!(!file.path().exists());
        file.remove().unwrap();
    }

    #[test]
    fn test_write_creates_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicFile::new(temp_dir.path().join("nested/dir/state.json"));
        file.write("x").unwrap();
        assert_eq!(file.read().unwrap().as_deref(), Some("x"));
    }
}
