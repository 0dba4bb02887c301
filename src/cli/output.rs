//! Output formatting for the CLI
//!
//! Handlers never print directly; they go through [`OutputFormatter`] so
//! `--json` and `--no-color` behave the same everywhere.

use crate::error::Result;
use colored::Colorize;
use serde::Serialize;

/// Formatter for user-facing terminal output
#[derive(Debug, Clone, Copy)]
pub struct OutputFormatter {
    json: bool,
    no_color: bool,
}

impl OutputFormatter {
    /// Create a formatter from the global CLI flags
    #[must_use]
    pub const fn new(json: bool, no_color: bool) -> Self {
        Self { json, no_color }
    }

    /// Whether JSON mode is active
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.no_color {
            println!("{message}");
        } else {
            println!("{}", message.green());
        }
    }

    /// Print an informational message
    pub fn info(&self, message: &str) {
        println!("{message}");
    }

    /// Print a warning to stderr
    pub fn warning(&self, message: &str) {
        if self.no_color {
            eprintln!("{message}");
        } else {
            eprintln!("{}", message.yellow());
        }
    }

    /// Print an error to stderr
    pub fn error(&self, message: &str) {
        if self.no_color {
            eprintln!("Error: {message}");
        } else {
            eprintln!("{} {}", "Error:".red().bold(), message);
        }
    }

    /// Print a value as pretty JSON
    pub fn json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!(
            "{}",
            serde_json::to_string_pretty(value)
                .map_err(|e| crate::error::TicketDeskError::custom(e.to_string()))?
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag() {
        assert!(OutputFormatter::new(true, false).is_json());
        assert!(!OutputFormatter::new(false, true).is_json());
    }
}
