use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use openclaw_core::AgentSwarmSession;
use openclaw_infrastructure::{ConfigService, OpenClawPaths};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::prefs::PanelTarget;

#[derive(Parser)]
#[command(name = "openclaw")]
#[command(about = "OpenClaw console state - orchestrator status and workspace preferences", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or change persisted workspace preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
    /// Resolve the orchestrator status for the given activity
    Status {
        /// Swarm session as ID=STATUS (repeatable)
        #[arg(long = "session", value_parser = commands::status::parse_session)]
        sessions: Vec<AgentSwarmSession>,
        /// A chat response is streaming
        #[arg(long)]
        streaming: bool,
        /// A chat message is waiting for its first response
        #[arg(long)]
        waiting: bool,
    },
}

#[derive(Subcommand)]
enum PrefsAction {
    /// Print current preferences
    Show,
    /// Toggle a panel flag
    Toggle {
        #[arg(value_enum)]
        target: PanelTarget,
    },
    /// Set whether the sidebar is collapsed
    SetSidebar { collapsed: bool },
    /// Set whether the file explorer is collapsed
    SetFileExplorer { collapsed: bool },
    /// Set whether the chat panel is open
    SetChatPanel { open: bool },
    /// Set the chat panel target session
    SetSessionKey { key: String },
    /// Remove stored preferences
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_service = ConfigService::new(OpenClawPaths::new(None));
    let config = config_service
        .load(cli.config.as_deref())
        .context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Prefs { action } => {
            let state = commands::open_state(&config, &config_service)?;
            let prefs = &state.preferences;
            match action {
                PrefsAction::Show => {}
                PrefsAction::Toggle { target } => commands::prefs::toggle(prefs, target),
                PrefsAction::SetSidebar { collapsed } => prefs.set_sidebar_collapsed(collapsed),
                PrefsAction::SetFileExplorer { collapsed } => {
                    prefs.set_file_explorer_collapsed(collapsed)
                }
                PrefsAction::SetChatPanel { open } => prefs.set_chat_panel_open(open),
                PrefsAction::SetSessionKey { key } => prefs.set_chat_panel_session_key(key),
                PrefsAction::Reset => prefs.clear_persisted(),
            }
            commands::prefs::print(prefs)?;
        }
        Commands::Status {
            sessions,
            streaming,
            waiting,
        } => commands::status::run(sessions, streaming, waiting)?,
    }

    Ok(())
}
