//! Console configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_log_level() -> String {
    "info".to_string()
}

/// Console configuration, read from `config.toml`.
///
/// ```toml
/// storage_dir = "/var/lib/openclaw/storage"
/// log_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Directory for durable client storage. `None` uses the platform default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,

    /// Default tracing filter; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            storage_dir: None,
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: ConsoleConfig = toml::from_str("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_full() {
        let config: ConsoleConfig =
            toml::from_str("storage_dir = \"/tmp/claw\"\nlog_level = \"debug\"").unwrap();
        assert_eq!(config.storage_dir, Some(PathBuf::from("/tmp/claw")));
        assert_eq!(config.log_level, "debug");
    }
}
