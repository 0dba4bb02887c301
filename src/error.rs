//! Error types for ticketdesk
//!
//! All fallible operations in the crate return [`Result`], built on the
//! single [`TicketDeskError`] enum. Errors are recovered at the intake
//! boundary (menu or HTTP) and rendered as a user-visible message or an
//! HTTP status; none are fatal to the process.

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, TicketDeskError>;

/// All errors that can occur in ticketdesk
#[derive(Debug, Error)]
pub enum TicketDeskError {
    /// A required intake field was blank after trimming
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    /// The submitted category is not in the admin directory
    #[error("invalid category: '{category}'")]
    InvalidCategory { category: String },

    /// Every 4-digit number for this category has been issued
    #[error("ticket numbers exhausted for category '{category}'")]
    NumbersExhausted { category: String },

    /// No ticket with the given id exists
    #[error("ticket not found: {id}")]
    TicketNotFound { id: u64 },

    /// Malformed user input that is not covered by a more specific variant
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be loaded or parsed
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Interactive prompt failure
    #[error(transparent)]
    Dialog(#[from] dialoguer::Error),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors that do not fit other variants
    #[error("{0}")]
    Custom(String),
}

impl TicketDeskError {
    /// Create a custom error from any displayable value
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Message shown to the user at the intake boundary
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyField { field } => format!("{field} cannot be empty!"),
            Self::InvalidCategory { category } => {
                format!("Invalid category: '{category}'. Ticket not created.")
            },
            Self::NumbersExhausted { category } => format!(
                "All ticket numbers for category '{category}' are in use. Ticket not created."
            ),
            Self::TicketNotFound { id } => format!("Ticket not found: {id}"),
            _ => self.to_string(),
        }
    }

    /// Actionable suggestions for fixing the error, if any
    #[must_use]
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyField { field } => {
                vec![format!("Enter a non-empty {field} and try again")]
            },
            Self::InvalidCategory { .. } => {
                vec!["Pick one of the configured categories (e.g. IT, HR, Finance)".to_string()]
            },
            Self::NumbersExhausted { .. } => {
                vec!["Submit the ticket under a different category".to_string()]
            },
            Self::Config(_) => {
                vec!["Check ticketdesk.toml and TICKETDESK_* environment variables".to_string()]
            },
            _ => Vec::new(),
        }
    }

    /// Whether the caller can retry with corrected input
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::EmptyField { .. }
                | Self::InvalidCategory { .. }
                | Self::InvalidInput(_)
                | Self::TicketNotFound { .. }
        )
    }
}
