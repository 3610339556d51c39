//! Reactive orchestrator status.
//!
//! Combines the swarm registry with the chat activity flags and publishes the
//! resolved `OrchestratorInfo` to subscribers whenever it actually changes.

use std::sync::{Arc, Mutex, Weak};

use openclaw_core::orchestrator::{ActivityFlags, OrchestratorInfo, OrchestratorSelector};
use openclaw_core::subscription::{Listeners, SubscriptionId};
use openclaw_core::swarm::SwarmSessionRegistry;

/// Publishes the orchestrator status derived from a registry and the chat flags.
///
/// Subscribers receive an `Arc<OrchestratorInfo>`; an unchanged status is
/// never re-published, and `current()` keeps returning the same `Arc` until
/// the status content changes.
pub struct OrchestratorStatusService {
    registry: Arc<SwarmSessionRegistry>,
    flags: Mutex<ActivityFlags>,
    selector: OrchestratorSelector,
    published: Mutex<Arc<OrchestratorInfo>>,
    listeners: Listeners<Arc<OrchestratorInfo>>,
    registry_subscription: SubscriptionId,
}

impl OrchestratorStatusService {
    /// Creates the service and subscribes it to registry changes.
    ///
    /// The registry only holds a weak reference back to the service.
    pub fn new(registry: Arc<SwarmSessionRegistry>) -> Arc<Self> {
        Arc::new_cyclic(|weak: &Weak<Self>| {
            let selector = OrchestratorSelector::new();
            let initial = selector.select(&registry, ActivityFlags::default());

            let weak = weak.clone();
            let registry_subscription = registry.subscribe(move |_revision| {
                if let Some(service) = weak.upgrade() {
                    service.refresh();
                }
            });

            Self {
                registry,
                flags: Mutex::new(ActivityFlags::default()),
                selector,
                published: Mutex::new(initial),
                listeners: Listeners::new(),
                registry_subscription,
            }
        })
    }

    pub fn registry(&self) -> &Arc<SwarmSessionRegistry> {
        &self.registry
    }

    /// Current status. Repeated calls with unchanged inputs return the same `Arc`.
    pub fn current(&self) -> Arc<OrchestratorInfo> {
        let flags = self.flags();
        self.selector.select(&self.registry, flags)
    }

    pub fn flags(&self) -> ActivityFlags {
        *self.flags.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Marks whether a chat response is streaming.
    pub fn set_streaming(&self, is_streaming: bool) {
        self.update_flags(|f| f.is_streaming = is_streaming);
    }

    /// Marks whether a sent message is still waiting for its first response.
    pub fn set_waiting_for_response(&self, waiting: bool) {
        self.update_flags(|f| f.waiting_for_response = waiting);
    }

    /// Replaces both flags at once.
    pub fn set_activity(&self, flags: ActivityFlags) {
        self.update_flags(|f| *f = flags);
    }

    /// Registers a listener called whenever the published status changes.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Arc<OrchestratorInfo>) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn update_flags<F>(&self, mutate: F)
    where
        F: FnOnce(&mut ActivityFlags),
    {
        {
            let mut flags = self.flags.lock().unwrap_or_else(|e| e.into_inner());
            let before = *flags;
            mutate(&mut flags);
            if *flags == before {
                return;
            }
        }
        self.refresh();
    }

    /// Re-resolves and publishes if the result is a different value.
    fn refresh(&self) {
        let info = self.current();
        {
            let mut published = self.published.lock().unwrap_or_else(|e| e.into_inner());
            if Arc::ptr_eq(&published, &info) {
                return;
            }
            *published = info.clone();
        }

        tracing::debug!("[Orchestrator] status -> {}", info.label);
        self.listeners.notify(&info);
    }
}

impl Drop for OrchestratorStatusService {
    fn drop(&mut self) {
        self.registry.unsubscribe(self.registry_subscription);
    }
}
