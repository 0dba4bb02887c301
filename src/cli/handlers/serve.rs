//! Handler for the `serve` command
//!
//! Builds the shared store, applies CLI overrides to the configured bind
//! address, and runs the HTTP intake surface until interrupted.

use crate::api::AppState;
use crate::cli::output::OutputFormatter;
use crate::config::Config;
use crate::error::Result;
use crate::store::MemoryStore;
use std::path::PathBuf;
use std::sync::Arc;

/// Start the HTTP API and static front-end
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the runtime fails to
/// start.
pub fn handle_serve_command(
    mut config: Config,
    host: Option<String>,
    port: Option<u16>,
    static_dir: Option<PathBuf>,
    formatter: &OutputFormatter,
) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(static_dir) = static_dir {
        config.server.static_dir = static_dir;
    }

    let store = Arc::new(MemoryStore::new(config.directory()));
    let state = AppState::new(store);

    let addr = config.bind_addr();
    formatter.info(&format!("ticketdesk listening on http://{addr}"));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(crate::api::serve(&addr, state, &config.server.static_dir))
}
