//! ticketdesk - A minimal in-memory helpdesk ticket tracker
//!
//! Users submit a ticket (name, description, category); the tracker
//! assigns it a sequential id, a random 4-digit tracking number unique
//! within its category, and the admin who owns that category, then keeps
//! it in memory for listing and lookup. Two intake surfaces share the
//! same core: an interactive console menu and an HTTP API with a static
//! web front-end (feature `api`, enabled by default).
//!
//! Nothing is persisted; restarting the process starts with an empty
//! tracker.
//!
//! # Example
//!
//! ```rust
//! use ticketdesk::core::TicketDraft;
//! use ticketdesk::store::{MemoryStore, TicketRepository};
//!
//! let store = MemoryStore::default();
//! let ticket = store
//!     .create(TicketDraft::new("Printer jam", "Floor 2 printer", "it"))
//!     .unwrap();
//!
//! assert_eq!(ticket.category, "IT");
//! assert_eq!(ticket.assigned_to, "Alice");
//! ```

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod store;

#[cfg(feature = "api")]
pub mod api;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{Result, TicketDeskError};
