//! Domain layer of the OpenClaw console state.
//!
//! Holds the pure pieces: swarm session contract, orchestrator status
//! resolution, the preferences model with its persisted projection, and the
//! storage trait the infrastructure crate implements.

pub mod config;
pub mod error;
pub mod memo;
pub mod orchestrator;
pub mod preferences;
pub mod storage;
pub mod subscription;
pub mod swarm;

pub use config::ConsoleConfig;
pub use error::{ConsoleError, Result};
pub use memo::Memo;
pub use orchestrator::{
    ActivityFlags, OrchestratorInfo, OrchestratorSelector, OrchestratorState, resolve,
};
pub use preferences::{PersistedWorkspacePreferences, WORKSPACE_STORAGE_KEY, WorkspacePreferences};
pub use storage::KeyValueStorage;
pub use subscription::{Listeners, SubscriptionId};
pub use swarm::{AgentSwarmSession, SwarmSessionRegistry, SwarmStatus};
