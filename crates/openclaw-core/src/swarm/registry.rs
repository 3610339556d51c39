//! In-process registry of swarm sessions.
//!
//! The registry is the single writer path for the session list. Readers take
//! snapshots; every effective mutation bumps `revision` and notifies
//! subscribers with the new revision.

use std::sync::Mutex;

use crate::subscription::{Listeners, SubscriptionId};
use crate::swarm::model::{AgentSwarmSession, SwarmStatus};

#[derive(Default)]
struct RegistryInner {
    sessions: Vec<AgentSwarmSession>,
    revision: u64,
}

/// Holds the active swarm sessions in insertion order.
#[derive(Default)]
pub struct SwarmSessionRegistry {
    inner: Mutex<RegistryInner>,
    listeners: Listeners<u64>,
}

impl SwarmSessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a session, or replaces the one with the same id.
    pub fn upsert(&self, session: AgentSwarmSession) {
        let revision = {
            let mut inner = self.lock();
            match inner
                .sessions
                .iter_mut()
                .find(|s| s.session_id == session.session_id)
            {
                Some(existing) if *existing == session => return,
                Some(existing) => *existing = session,
                None => inner.sessions.push(session),
            }
            inner.revision += 1;
            inner.revision
        };
        tracing::debug!("[Registry] upsert -> revision {}", revision);
        self.listeners.notify(&revision);
    }

    /// Updates the status of an existing session. Returns `false` if the id is unknown.
    pub fn set_status(&self, session_id: &str, status: SwarmStatus) -> bool {
        let revision = {
            let mut inner = self.lock();
            let Some(session) = inner.sessions.iter_mut().find(|s| s.session_id == session_id)
            else {
                return false;
            };
            if session.swarm_status == status {
                return true;
            }
            session.swarm_status = status;
            inner.revision += 1;
            inner.revision
        };
        tracing::debug!(
            "[Registry] session {} -> {} (revision {})",
            session_id,
            status,
            revision
        );
        self.listeners.notify(&revision);
        true
    }

    /// Removes a session. Returns `false` if the id is unknown.
    pub fn remove(&self, session_id: &str) -> bool {
        let revision = {
            let mut inner = self.lock();
            let before = inner.sessions.len();
            inner.sessions.retain(|s| s.session_id != session_id);
            if inner.sessions.len() == before {
                return false;
            }
            inner.revision += 1;
            inner.revision
        };
        tracing::debug!("[Registry] removed {} (revision {})", session_id, revision);
        self.listeners.notify(&revision);
        true
    }

    /// Removes every session.
    pub fn clear(&self) {
        let revision = {
            let mut inner = self.lock();
            if inner.sessions.is_empty() {
                return;
            }
            inner.sessions.clear();
            inner.revision += 1;
            inner.revision
        };
        tracing::debug!("[Registry] cleared (revision {})", revision);
        self.listeners.notify(&revision);
    }

    /// Snapshot of the current sessions.
    pub fn sessions(&self) -> Vec<AgentSwarmSession> {
        self.lock().sessions.clone()
    }

    /// Snapshot of the sessions together with the revision they belong to.
    pub fn snapshot(&self) -> (u64, Vec<AgentSwarmSession>) {
        let inner = self.lock();
        (inner.revision, inner.sessions.clone())
    }

    /// Number of sessions in an active status.
    pub fn active_count(&self) -> usize {
        self.lock().sessions.iter().filter(|s| s.is_active()).count()
    }

    /// Monotonic counter bumped on every effective mutation.
    pub fn revision(&self) -> u64 {
        self.lock().revision
    }

    pub fn len(&self) -> usize {
        self.lock().sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registers a change listener; it receives the new revision.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&u64) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RegistryInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn test_upsert_and_replace() {
        let registry = SwarmSessionRegistry::new();
        registry.upsert(AgentSwarmSession::new("a", SwarmStatus::Idle));
        registry.upsert(AgentSwarmSession::new("b", SwarmStatus::Running));
        registry.upsert(AgentSwarmSession::new("a", SwarmStatus::Thinking));

        let sessions = registry.sessions();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].session_id, "a");
        assert_eq!(sessions[0].swarm_status, SwarmStatus::Thinking);
        assert_eq!(registry.active_count(), 2);
        assert_eq!(registry.revision(), 3);
    }

    #[test]
    fn test_noop_mutations_keep_revision() {
        let registry = SwarmSessionRegistry::new();
        registry.upsert(AgentSwarmSession::new("a", SwarmStatus::Running));
        assert_eq!(registry.revision(), 1);

        registry.upsert(AgentSwarmSession::new("a", SwarmStatus::Running));
        assert!(registry.set_status("a", SwarmStatus::Running));
        assert!(!registry.remove("missing"));
        assert!(!registry.set_status("missing", SwarmStatus::Idle));

        assert_eq!(registry.revision(), 1);
    }

    #[test]
    fn test_set_status_and_remove() {
        let registry = SwarmSessionRegistry::new();
        registry.upsert(AgentSwarmSession::new("a", SwarmStatus::Running));
        assert_eq!(registry.active_count(), 1);

        assert!(registry.set_status("a", SwarmStatus::Completed));
        assert_eq!(registry.active_count(), 0);

        assert!(registry.remove("a"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_subscribers_receive_revisions() {
        let registry = SwarmSessionRegistry::new();
        let last = Arc::new(AtomicU64::new(0));
        let sink = last.clone();
        let id = registry.subscribe(move |rev| sink.store(*rev, Ordering::SeqCst));

        registry.upsert(AgentSwarmSession::new("a", SwarmStatus::Running));
        registry.set_status("a", SwarmStatus::Idle);
        assert_eq!(last.load(Ordering::SeqCst), 2);

        assert!(registry.unsubscribe(id));
        registry.clear();
        assert_eq!(last.load(Ordering::SeqCst), 2);
        assert_eq!(registry.revision(), 3);
    }

    #[test]
    fn test_clear_notifies_once() {
        let registry = SwarmSessionRegistry::new();
        let calls = Arc::new(AtomicU64::new(0));
        let counter = calls.clone();
        registry.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        registry.clear(); // already empty
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        registry.upsert(AgentSwarmSession::new("a", SwarmStatus::Running));
        registry.upsert(AgentSwarmSession::new("b", SwarmStatus::Idle));
        registry.clear();

        assert!(registry.is_empty());
        assert_eq!(registry.revision(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
