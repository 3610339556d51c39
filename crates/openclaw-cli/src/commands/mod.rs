pub mod prefs;
pub mod status;

use anyhow::{Context, Result};
use openclaw_application::ConsoleState;
use openclaw_core::ConsoleConfig;
use openclaw_infrastructure::ConfigService;

/// Opens file-backed console state for the configured storage directory.
pub fn open_state(config: &ConsoleConfig, config_service: &ConfigService) -> Result<ConsoleState> {
    ConsoleState::bootstrap(config, config_service).context("Failed to open console state")
}
