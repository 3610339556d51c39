//! Application layer: the state containers UI code talks to.

pub mod console_state;
pub mod orchestrator_status;
pub mod preferences_store;

pub use console_state::ConsoleState;
pub use orchestrator_status::OrchestratorStatusService;
pub use preferences_store::WorkspacePreferencesStore;
