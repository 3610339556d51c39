//! Workspace layout and navigation preferences.

pub mod model;

pub use model::{
    PersistedWorkspacePreferences, WORKSPACE_STORAGE_KEY, WorkspacePreferences, decode_persisted,
    merge_persisted, partialize,
};
