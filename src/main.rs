//! ticketdesk - minimal helpdesk ticket tracker
//!
//! This is the main entry point for the ticketdesk CLI application. It
//! parses command-line arguments and dispatches to the command handlers.

use clap::Parser;
use std::process;
use ticketdesk::cli::{Cli, Commands, OutputFormatter, handlers};
use ticketdesk::config::Config;
use ticketdesk::error::Result;
use ticketdesk::store::MemoryStore;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Configure output formatter based on flags
    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    // Execute the command and handle errors
    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the CLI application with the parsed arguments
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    // Set up logging if verbose mode is enabled
    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    }

    let config = Config::load_or_default()?;

    match cli.command {
        Commands::Menu => {
            let store = MemoryStore::new(config.directory());
            handlers::handle_menu_command(&store, formatter)
        },
        #[cfg(feature = "api")]
        Commands::Serve {
            host,
            port,
            static_dir,
        } => handlers::handle_serve_command(config, host, port, static_dir, formatter),
    }
}

/// Handle errors and display them to the user
///
/// Prints the user-facing message, any suggestions, and the raw error as
/// JSON when `--json` is active.
fn handle_error(error: &ticketdesk::TicketDeskError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        formatter.info("\nSuggestions:");
        for suggestion in &suggestions {
            formatter.info(&format!("  • {suggestion}"));
        }
    }

    if formatter.is_json() {
        let _ = formatter.json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
        }));
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let _cli = Cli::parse_from(["ticketdesk", "menu"]);
        #[cfg(feature = "api")]
        let _cli = Cli::parse_from(["ticketdesk", "serve"]);
    }
}
