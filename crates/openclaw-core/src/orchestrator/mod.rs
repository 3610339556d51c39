//! Orchestrator status: one user-facing answer to "what is the system doing".

pub mod model;
pub mod resolver;
pub mod selector;

pub use model::{ActivityFlags, OrchestratorInfo, OrchestratorState};
pub use resolver::resolve;
pub use selector::OrchestratorSelector;
