//! Swarm session domain.
//!
//! A swarm session is a tracked multi-agent execution unit. This module only
//! carries the read/update contract the orchestrator status depends on.

pub mod model;
pub mod registry;

pub use model::{AgentSwarmSession, SwarmStatus};
pub use registry::SwarmSessionRegistry;
