//! Preferences domain model and its persisted projection.
//!
//! `active_sub_page` is session-scoped and never reaches storage. The other
//! four fields are written as one JSON record under `WORKSPACE_STORAGE_KEY`.

use serde::{Deserialize, Serialize};

/// Storage namespace for persisted preferences.
///
/// The version suffix marks a breaking schema boundary: bumping it abandons
/// records written under the old key instead of migrating them.
pub const WORKSPACE_STORAGE_KEY: &str = "openclaw-workspace-v1";

/// Default chat panel target.
pub const DEFAULT_CHAT_PANEL_SESSION_KEY: &str = "main";

/// Full in-memory preferences.
///
/// Serialize-only: state is rebuilt from storage through `merge_persisted`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspacePreferences {
    pub sidebar_collapsed: bool,
    pub file_explorer_collapsed: bool,
    /// Active sub-page; `None` is the chat-only view.
    pub active_sub_page: Option<String>,
    pub chat_panel_open: bool,
    pub chat_panel_session_key: String,
}

impl Default for WorkspacePreferences {
    fn default() -> Self {
        Self {
            sidebar_collapsed: false,
            file_explorer_collapsed: true,
            active_sub_page: None,
            chat_panel_open: false,
            chat_panel_session_key: DEFAULT_CHAT_PANEL_SESSION_KEY.to_string(),
        }
    }
}

/// The persisted subset. Every field is required on read, so a partial
/// record is rejected as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedWorkspacePreferences {
    pub sidebar_collapsed: bool,
    pub file_explorer_collapsed: bool,
    pub chat_panel_open: bool,
    pub chat_panel_session_key: String,
}

/// Projects the full state onto the persisted subset.
pub fn partialize(prefs: &WorkspacePreferences) -> PersistedWorkspacePreferences {
    PersistedWorkspacePreferences {
        sidebar_collapsed: prefs.sidebar_collapsed,
        file_explorer_collapsed: prefs.file_explorer_collapsed,
        chat_panel_open: prefs.chat_panel_open,
        chat_panel_session_key: prefs.chat_panel_session_key.clone(),
    }
}

/// Applies a persisted record onto the defaults. `active_sub_page` always
/// starts as `None`.
pub fn merge_persisted(persisted: Option<PersistedWorkspacePreferences>) -> WorkspacePreferences {
    let defaults = WorkspacePreferences::default();
    match persisted {
        Some(p) => WorkspacePreferences {
            sidebar_collapsed: p.sidebar_collapsed,
            file_explorer_collapsed: p.file_explorer_collapsed,
            chat_panel_open: p.chat_panel_open,
            chat_panel_session_key: p.chat_panel_session_key,
            ..defaults
        },
        None => defaults,
    }
}

/// Parses a raw stored record. Anything that is not a complete record is
/// treated as "no preferences yet".
pub fn decode_persisted(raw: &str) -> Option<PersistedWorkspacePreferences> {
    if raw.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<PersistedWorkspacePreferences>(raw) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!("[Preferences] Discarding malformed stored record: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = WorkspacePreferences::default();
        assert!(!prefs.sidebar_collapsed);
        assert!(prefs.file_explorer_collapsed);
        assert!(prefs.active_sub_page.is_none());
        assert!(!prefs.chat_panel_open);
        assert_eq!(prefs.chat_panel_session_key, "main");
    }

    #[test]
    fn test_partialize_drops_sub_page() {
        let prefs = WorkspacePreferences {
            active_sub_page: Some("dashboard".to_string()),
            chat_panel_open: true,
            ..Default::default()
        };
        let json = serde_json::to_value(partialize(&prefs)).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert!(!object.contains_key("activeSubPage"));
        assert_eq!(json["chatPanelOpen"], true);
        assert_eq!(json["chatPanelSessionKey"], "main");
    }

    #[test]
    fn test_merge_resets_sub_page() {
        let persisted = PersistedWorkspacePreferences {
            sidebar_collapsed: true,
            file_explorer_collapsed: false,
            chat_panel_open: true,
            chat_panel_session_key: "alpha".to_string(),
        };
        let prefs = merge_persisted(Some(persisted));
        assert!(prefs.sidebar_collapsed);
        assert!(!prefs.file_explorer_collapsed);
        assert!(prefs.chat_panel_open);
        assert_eq!(prefs.chat_panel_session_key, "alpha");
        assert!(prefs.active_sub_page.is_none());

        assert_eq!(merge_persisted(None), WorkspacePreferences::default());
    }

    #[test]
    fn test_decode_ignores_stored_sub_page() {
        let raw = r#"{
            "sidebarCollapsed": true,
            "fileExplorerCollapsed": true,
            "chatPanelOpen": false,
            "chatPanelSessionKey": "beta",
            "activeSubPage": "terminal"
        }"#;
        let prefs = merge_persisted(decode_persisted(raw));
        assert!(prefs.sidebar_collapsed);
        assert_eq!(prefs.chat_panel_session_key, "beta");
        assert!(prefs.active_sub_page.is_none());
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(decode_persisted("").is_none());
        assert!(decode_persisted("not json").is_none());
        assert!(decode_persisted("[1, 2, 3]").is_none());
        assert!(decode_persisted(r#"{"sidebarCollapsed": true}"#).is_none());
        assert!(
            decode_persisted(
                r#"{"sidebarCollapsed": "yes", "fileExplorerCollapsed": true,
                    "chatPanelOpen": false, "chatPanelSessionKey": "main"}"#
            )
            .is_none()
        );
    }
}
