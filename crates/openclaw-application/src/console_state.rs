//! Console state container handed to UI consumers.

use std::sync::Arc;

use openclaw_core::config::ConsoleConfig;
use openclaw_core::error::Result;
use openclaw_core::storage::KeyValueStorage;
use openclaw_core::swarm::SwarmSessionRegistry;
use openclaw_infrastructure::{ConfigService, FileKeyValueStorage, InMemoryKeyValueStorage};

use crate::orchestrator_status::OrchestratorStatusService;
use crate::preferences_store::WorkspacePreferencesStore;

/// Explicit state container for the console.
///
/// Passed by reference to whatever renders the console; there is no ambient
/// global store.
#[derive(Clone)]
pub struct ConsoleState {
    pub preferences: Arc<WorkspacePreferencesStore>,
    pub orchestrator: Arc<OrchestratorStatusService>,
}

impl ConsoleState {
    /// Wires the containers over the given storage and registry.
    pub fn new(storage: Arc<dyn KeyValueStorage>, registry: Arc<SwarmSessionRegistry>) -> Self {
        Self {
            preferences: Arc::new(WorkspacePreferencesStore::new(storage)),
            orchestrator: OrchestratorStatusService::new(registry),
        }
    }

    /// Builds file-backed state from configuration.
    pub fn bootstrap(config: &ConsoleConfig, config_service: &ConfigService) -> Result<Self> {
        let storage_dir = config_service.storage_dir(config)?;
        tracing::info!("[Bootstrap] Storage directory: {}", storage_dir.display());

        let storage: Arc<dyn KeyValueStorage> = Arc::new(FileKeyValueStorage::new(storage_dir));
        Ok(Self::new(storage, Arc::new(SwarmSessionRegistry::new())))
    }

    /// State that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryKeyValueStorage::new()),
            Arc::new(SwarmSessionRegistry::new()),
        )
    }

    pub fn registry(&self) -> &Arc<SwarmSessionRegistry> {
        self.orchestrator.registry()
    }
}
