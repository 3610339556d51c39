use anyhow::Result;
use openclaw_core::{AgentSwarmSession, SwarmStatus, resolve};

/// Parses `ID=STATUS` into a session.
pub fn parse_session(raw: &str) -> Result<AgentSwarmSession, String> {
    let (id, status) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=STATUS, got '{}'", raw))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing session id in '{}'", raw));
    }
    let status: SwarmStatus = status.parse()?;
    Ok(AgentSwarmSession::new(id, status))
}

pub fn run(sessions: Vec<AgentSwarmSession>, streaming: bool, waiting: bool) -> Result<()> {
    let info = resolve(&sessions, streaming, waiting);
    tracing::debug!("[Status] {} session(s) -> {}", sessions.len(), info.state);
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
