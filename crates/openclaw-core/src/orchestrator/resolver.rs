//! Pure status resolution.

use crate::orchestrator::model::{OrchestratorInfo, OrchestratorState};
use crate::swarm::model::AgentSwarmSession;

/// Reduces swarm activity and the chat flags into a single status.
///
/// Priority, first match wins:
/// 1. any session running or thinking -> `Orchestrating`
/// 2. `is_streaming` -> `Working`
/// 3. `waiting_for_response` -> `Thinking`
/// 4. otherwise -> `Idle`
///
/// Swarm activity outranks the chat flags. Statuses other than running and
/// thinking count as inactive.
pub fn resolve(
    sessions: &[AgentSwarmSession],
    is_streaming: bool,
    waiting_for_response: bool,
) -> OrchestratorInfo {
    let active = sessions.iter().filter(|s| s.is_active()).count();

    if active > 0 {
        let noun = if active > 1 { "agents" } else { "agent" };
        return OrchestratorInfo {
            state: OrchestratorState::Orchestrating,
            label: format!("Orchestrating {} {}", active, noun),
            active_agent_count: active,
        };
    }

    let (state, label) = if is_streaming {
        (OrchestratorState::Working, "Working...")
    } else if waiting_for_response {
        (OrchestratorState::Thinking, "Thinking...")
    } else {
        (OrchestratorState::Idle, "Idle")
    };

    OrchestratorInfo {
        state,
        label: label.to_string(),
        active_agent_count: 0,
    }
}
