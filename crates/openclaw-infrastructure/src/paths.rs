//! Unified path management for OpenClaw files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/openclaw/          # Config directory
//! ├── config.toml              # Console configuration
//! └── storage/                 # Durable client storage (one file per key)
//!     └── openclaw-workspace-v1.json
//! ```

use std::path::PathBuf;

use openclaw_core::error::{ConsoleError, Result};

const APP_DIR_NAME: &str = "openclaw";

/// Resolves OpenClaw paths, optionally under an explicit base directory.
#[derive(Debug, Clone, Default)]
pub struct OpenClawPaths {
    base_dir: Option<PathBuf>,
}

impl OpenClawPaths {
    /// Creates a resolver. `base_dir` replaces the platform config directory,
    /// which keeps tests away from the real home directory.
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    /// Returns the OpenClaw configuration directory (e.g., `~/.config/openclaw/`).
    pub fn config_dir(&self) -> Result<PathBuf> {
        let root = match &self.base_dir {
            Some(base) => base.clone(),
            None => dirs::config_dir()
                .ok_or_else(|| ConsoleError::config("Cannot find config directory"))?,
        };
        Ok(root.join(APP_DIR_NAME))
    }

    /// Returns the path to `config.toml`.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Returns the default durable storage directory.
    pub fn storage_dir(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("storage"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_under_base() {
        let paths = OpenClawPaths::new(Some(PathBuf::from("/tmp/base")));
        assert_eq!(paths.config_dir().unwrap(), PathBuf::from("/tmp/base/openclaw"));
        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/base/openclaw/config.toml")
        );
        assert_eq!(
            paths.storage_dir().unwrap(),
            PathBuf::from("/tmp/base/openclaw/storage")
        );
    }

    #[test]
    fn test_storage_dir_under_config_dir() {
        let paths = OpenClawPaths::new(Some(PathBuf::from("/srv")));
        let config_dir = paths.config_dir().unwrap();
        assert!(paths.storage_dir().unwrap().starts_with(&config_dir));
        assert!(config_dir.ends_with("openclaw"));
    }
}
