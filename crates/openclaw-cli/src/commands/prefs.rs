use anyhow::Result;
use clap::ValueEnum;
use openclaw_application::WorkspacePreferencesStore;

/// Panels that can be toggled from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PanelTarget {
    Sidebar,
    FileExplorer,
    ChatPanel,
}

pub fn toggle(prefs: &WorkspacePreferencesStore, target: PanelTarget) {
    match target {
        PanelTarget::Sidebar => prefs.toggle_sidebar(),
        PanelTarget::FileExplorer => prefs.toggle_file_explorer(),
        PanelTarget::ChatPanel => prefs.toggle_chat_panel(),
    }
}

pub fn print(prefs: &WorkspacePreferencesStore) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&prefs.snapshot())?);
    Ok(())
}
