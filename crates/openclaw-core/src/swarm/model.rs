use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Run status of a swarm session.
///
/// Only `Running` and `Thinking` count as active; every other status is
/// treated as inactive by status resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SwarmStatus {
    #[default]
    Idle,
    Running,
    Thinking,
    Completed,
    Failed,
}

impl SwarmStatus {
    /// Returns true for statuses that represent live agent activity.
    pub fn is_active(self) -> bool {
        matches!(self, SwarmStatus::Running | SwarmStatus::Thinking)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SwarmStatus::Idle => "idle",
            SwarmStatus::Running => "running",
            SwarmStatus::Thinking => "thinking",
            SwarmStatus::Completed => "completed",
            SwarmStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for SwarmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwarmStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "idle" => Ok(SwarmStatus::Idle),
            "running" => Ok(SwarmStatus::Running),
            "thinking" => Ok(SwarmStatus::Thinking),
            "completed" => Ok(SwarmStatus::Completed),
            "failed" => Ok(SwarmStatus::Failed),
            other => Err(format!("unknown swarm status '{}'", other)),
        }
    }
}

/// A multi-agent session as seen by the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSwarmSession {
    /// Opaque session identifier.
    pub session_id: String,
    /// Current run status.
    pub swarm_status: SwarmStatus,
}

impl AgentSwarmSession {
    pub fn new(session_id: impl Into<String>, swarm_status: SwarmStatus) -> Self {
        Self {
            session_id: session_id.into(),
            swarm_status,
        }
    }

    pub fn is_active(&self) -> bool {
        self.swarm_status.is_active()
    }
}
