//! Configuration service implementation.
//!
//! Loads `ConsoleConfig` from `config.toml` and resolves the effective
//! storage directory.

use std::fs;
use std::path::{Path, PathBuf};

use openclaw_core::config::ConsoleConfig;
use openclaw_core::error::{ConsoleError, Result};

use crate::paths::OpenClawPaths;

/// Loads console configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigService {
    paths: OpenClawPaths,
}

impl ConfigService {
    pub fn new(paths: OpenClawPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &OpenClawPaths {
        &self.paths
    }

    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, the default `config.toml`
    /// is used and a missing file yields the defaults.
    pub fn load(&self, path: Option<&Path>) -> Result<ConsoleConfig> {
        let (config_path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (self.paths.config_file()?, false),
        };

        if !config_path.exists() {
            if required {
                return Err(ConsoleError::config(format!(
                    "Config file not found: {}",
                    config_path.display()
                )));
            }
            tracing::debug!(
                "[Config] {} not found, using defaults",
                config_path.display()
            );
            return Ok(ConsoleConfig::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            ConsoleError::config(format!("Failed to read {}: {}", config_path.display(), e))
        })?;

        let config: ConsoleConfig = toml::from_str(&content).map_err(|e| {
            ConsoleError::config(format!("Failed to parse {}: {}", config_path.display(), e))
        })?;

        tracing::info!("[Config] Loaded {}", config_path.display());
        Ok(config)
    }

    /// Storage directory from the config, or the platform default.
    pub fn storage_dir(&self, config: &ConsoleConfig) -> Result<PathBuf> {
        match &config.storage_dir {
            Some(dir) => Ok(dir.clone()),
            None => self.paths.storage_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp_dir: &TempDir) -> ConfigService {
        ConfigService::new(OpenClawPaths::new(Some(temp_dir.path().to_path_buf())))
    }

    #[test]
    fn test_missing_default_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = service(&temp_dir).load(None).unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        let err = service(&temp_dir).load(Some(&missing)).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_load_default_location() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir);
        let config_file = service.paths().config_file().unwrap();
        fs::create_dir_all(config_file.parent().unwrap()).unwrap();
        fs::write(&config_file, "log_level = \"debug\"\n").unwrap();

        let config = service.load(None).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.storage_dir.is_none());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "log_level = [").unwrap();

        let err = service(&temp_dir).load(Some(&path)).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_storage_dir_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir);

        let default_dir = service.storage_dir(&ConsoleConfig::default()).unwrap();
        assert_eq!(default_dir, temp_dir.path().join("openclaw").join("storage"));

        let custom = ConsoleConfig {
            storage_dir: Some(PathBuf::from("/data/claw")),
            ..Default::default()
        };
        assert_eq!(service.storage_dir(&custom).unwrap(), PathBuf::from("/data/claw"));
    }
}
