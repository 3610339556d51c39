//! Memoized resolution over a live registry.

use std::sync::Arc;

use crate::memo::Memo;
use crate::orchestrator::model::{ActivityFlags, OrchestratorInfo};
use crate::orchestrator::resolver::resolve;
use crate::swarm::registry::SwarmSessionRegistry;

/// Resolves the orchestrator status, recomputing only when the registry
/// revision or the activity flags change.
#[derive(Default)]
pub struct OrchestratorSelector {
    memo: Memo<(u64, ActivityFlags), OrchestratorInfo>,
}

impl OrchestratorSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(
        &self,
        registry: &SwarmSessionRegistry,
        flags: ActivityFlags,
    ) -> Arc<OrchestratorInfo> {
        let (revision, sessions) = registry.snapshot();
        self.memo.get_or_compute((revision, flags), || {
            let info = resolve(&sessions, flags.is_streaming, flags.waiting_for_response);
            tracing::debug!(
                "[Orchestrator] resolved {} (revision {}, {:?})",
                info.state,
                revision,
                flags
            );
            info
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::model::OrchestratorState;
    use crate::swarm::model::{AgentSwarmSession, SwarmStatus};

    #[test]
    fn test_unchanged_inputs_return_same_arc() {
        let registry = SwarmSessionRegistry::new();
        registry.upsert(AgentSwarmSession::new("a", SwarmStatus::Running));
        let selector = OrchestratorSelector::new();

        let first = selector.select(&registry, ActivityFlags::default());
        let second = selector.select(&registry, ActivityFlags::default());
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_flag_change_without_effect_keeps_arc() {
        let registry = SwarmSessionRegistry::new();
        registry.upsert(AgentSwarmSession::new("a", SwarmStatus::Running));
        let selector = OrchestratorSelector::new();

        let first = selector.select(&registry, ActivityFlags::new(false, false));
        // Swarm activity dominates, so the content stays equal.
        let second = selector.select(&registry, ActivityFlags::new(true, false));
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_registry_change_recomputes() {
        let registry = SwarmSessionRegistry::new();
        let selector = OrchestratorSelector::new();

        let idle = selector.select(&registry, ActivityFlags::default());
        assert_eq!(idle.state, OrchestratorState::Idle);

        registry.upsert(AgentSwarmSession::new("a", SwarmStatus::Thinking));
        let busy = selector.select(&registry, ActivityFlags::default());
        assert_eq!(busy.state, OrchestratorState::Orchestrating);
        assert!(!Arc::ptr_eq(&idle, &busy));
        assert!(Arc::ptr_eq(&busy, &selector.select(&registry, ActivityFlags::default())));
    }
}
