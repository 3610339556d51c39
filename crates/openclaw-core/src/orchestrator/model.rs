use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete orchestrator state shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrchestratorState {
    #[default]
    Idle,
    /// Waiting for the first response token.
    Thinking,
    /// A response is streaming in.
    Working,
    /// One or more swarm sessions are running or thinking.
    Orchestrating,
    /// Reserved for voice input; status resolution never produces it.
    Listening,
}

impl OrchestratorState {
    pub fn as_str(self) -> &'static str {
        match self {
            OrchestratorState::Idle => "idle",
            OrchestratorState::Thinking => "thinking",
            OrchestratorState::Working => "working",
            OrchestratorState::Orchestrating => "orchestrating",
            OrchestratorState::Listening => "listening",
        }
    }
}

impl fmt::Display for OrchestratorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived orchestrator status. Never mutated; each resolution yields a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestratorInfo {
    pub state: OrchestratorState,
    /// Display string derived from `state` and `active_agent_count`.
    pub label: String,
    /// Sessions in an active swarm status.
    pub active_agent_count: usize,
}

impl Default for OrchestratorInfo {
    fn default() -> Self {
        Self {
            state: OrchestratorState::Idle,
            label: "Idle".to_string(),
            active_agent_count: 0,
        }
    }
}

/// Caller-supplied activity signals for the primary chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityFlags {
    pub is_streaming: bool,
    pub waiting_for_response: bool,
}

impl ActivityFlags {
    pub fn new(is_streaming: bool, waiting_for_response: bool) -> Self {
        Self {
            is_streaming,
            waiting_for_response,
        }
    }
}
