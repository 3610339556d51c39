//! Workspace preferences state container.
//!
//! Holds the current `WorkspacePreferences`, applies UI mutations, and writes
//! the persisted subset back to durable storage after each mutation of a
//! persisted field.

use std::sync::{Arc, Mutex, MutexGuard};

use openclaw_core::preferences::{
    WORKSPACE_STORAGE_KEY, WorkspacePreferences, decode_persisted, merge_persisted, partialize,
};
use openclaw_core::storage::KeyValueStorage;
use openclaw_core::subscription::{Listeners, SubscriptionId};

/// State container for workspace layout and navigation preferences.
///
/// Every mutation runs to completion under one lock acquisition, including
/// the storage write, so toggles never lose updates and writes reach storage
/// in mutation order. Mutations never fail: storage errors are logged and the
/// in-memory state stays authoritative.
///
/// # Example
///
/// ```ignore
/// let store = WorkspacePreferencesStore::new(storage);
/// store.toggle_sidebar();
/// assert!(store.sidebar_collapsed());
/// ```
pub struct WorkspacePreferencesStore {
    state: Mutex<WorkspacePreferences>,
    storage: Arc<dyn KeyValueStorage>,
    listeners: Listeners<WorkspacePreferences>,
}

impl WorkspacePreferencesStore {
    /// Creates the store and hydrates it from `storage`.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let initial = Self::hydrate(storage.as_ref());
        Self {
            state: Mutex::new(initial),
            storage,
            listeners: Listeners::new(),
        }
    }

    fn hydrate(storage: &dyn KeyValueStorage) -> WorkspacePreferences {
        match storage.get_item(WORKSPACE_STORAGE_KEY) {
            Ok(Some(raw)) => match decode_persisted(&raw) {
                Some(persisted) => {
                    tracing::info!("[Preferences] Hydrated from '{}'", WORKSPACE_STORAGE_KEY);
                    merge_persisted(Some(persisted))
                }
                None => WorkspacePreferences::default(),
            },
            Ok(None) => {
                tracing::info!("[Preferences] No stored preferences, using defaults");
                WorkspacePreferences::default()
            }
            Err(e) => {
                tracing::warn!("[Preferences] Failed to read stored preferences: {}", e);
                WorkspacePreferences::default()
            }
        }
    }

    // ============================================================================
    // Reads
    // ============================================================================

    pub fn snapshot(&self) -> WorkspacePreferences {
        self.lock().clone()
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.lock().sidebar_collapsed
    }

    pub fn file_explorer_collapsed(&self) -> bool {
        self.lock().file_explorer_collapsed
    }

    pub fn active_sub_page(&self) -> Option<String> {
        self.lock().active_sub_page.clone()
    }

    pub fn chat_panel_open(&self) -> bool {
        self.lock().chat_panel_open
    }

    pub fn chat_panel_session_key(&self) -> String {
        self.lock().chat_panel_session_key.clone()
    }

    // ============================================================================
    // Mutations
    // ============================================================================

    pub fn toggle_sidebar(&self) {
        self.update(true, |p| p.sidebar_collapsed = !p.sidebar_collapsed);
    }

    pub fn set_sidebar_collapsed(&self, collapsed: bool) {
        self.update(true, |p| p.sidebar_collapsed = collapsed);
    }

    pub fn toggle_file_explorer(&self) {
        self.update(true, |p| p.file_explorer_collapsed = !p.file_explorer_collapsed);
    }

    pub fn set_file_explorer_collapsed(&self, collapsed: bool) {
        self.update(true, |p| p.file_explorer_collapsed = collapsed);
    }

    /// Sets the active sub-page; `None` returns to the chat-only view.
    /// Session-scoped, never written to storage.
    pub fn set_active_sub_page(&self, page: Option<String>) {
        self.update(false, |p| p.active_sub_page = page);
    }

    pub fn toggle_chat_panel(&self) {
        self.update(true, |p| p.chat_panel_open = !p.chat_panel_open);
    }

    pub fn set_chat_panel_open(&self, open: bool) {
        self.update(true, |p| p.chat_panel_open = open);
    }

    pub fn set_chat_panel_session_key(&self, session_key: impl Into<String>) {
        let session_key = session_key.into();
        self.update(true, |p| p.chat_panel_session_key = session_key);
    }

    /// Removes the stored record and resets every field to its default.
    pub fn clear_persisted(&self) {
        let changed = {
            let mut state = self.lock();
            if let Err(e) = self.storage.remove_item(WORKSPACE_STORAGE_KEY) {
                tracing::warn!("[Preferences] Failed to clear stored preferences: {}", e);
            }
            let defaults = WorkspacePreferences::default();
            if *state == defaults {
                None
            } else {
                *state = defaults;
                Some(state.clone())
            }
        };
        tracing::debug!("[Preferences] Cleared");

        if let Some(snapshot) = changed {
            self.listeners.notify(&snapshot);
        }
    }

    // ============================================================================
    // Subscriptions
    // ============================================================================

    /// Registers a listener called with the new snapshot after each change.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&WorkspacePreferences) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn update<F>(&self, persist: bool, mutate: F)
    where
        F: FnOnce(&mut WorkspacePreferences),
    {
        let changed = {
            let mut state = self.lock();
            let before = state.clone();
            mutate(&mut state);
            if persist {
                self.persist(&state);
            }
            tracing::debug!("[Preferences] Updated: {:?}", *state);
            if *state == before {
                None
            } else {
                Some(state.clone())
            }
        };

        if let Some(snapshot) = changed {
            self.listeners.notify(&snapshot);
        }
    }

    /// Writes the persisted subset, replacing the stored record wholesale.
    fn persist(&self, prefs: &WorkspacePreferences) {
        let json = match serde_json::to_string(&partialize(prefs)) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("[Preferences] Failed to serialize preferences: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.set_item(WORKSPACE_STORAGE_KEY, &json) {
            tracing::warn!("[Preferences] Failed to save preferences: {}", e);
        }
    }

    fn lock(&self) -> MutexGuard<'_, WorkspacePreferences> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
