//! Command-line interface for ticketdesk
//!
//! Defines the clap command tree and re-exports the output formatter and
//! command handlers used by `main`.

pub mod handlers;
pub mod output;

pub use output::OutputFormatter;

use clap::{Parser, Subcommand};

/// A minimal in-memory helpdesk ticket tracker
#[derive(Parser)]
#[command(name = "ticketdesk", version, about, long_about = None)]
pub struct Cli {
    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive console menu
    Menu,

    /// Serve the HTTP API and static front-end
    #[cfg(feature = "api")]
    Serve {
        /// Bind host (overrides configuration)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides configuration)
        #[arg(short, long)]
        port: Option<u16>,

        /// Static asset directory (overrides configuration)
        #[arg(long)]
        static_dir: Option<std::path::PathBuf>,
    },
}
