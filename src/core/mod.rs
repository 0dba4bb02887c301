//! Core domain model for ticketdesk
//!
//! Holds the three pieces everything else calls into: the ticket types,
//! the category directory (validation + admin assignment), and the
//! ticket-number registry (per-category unique 4-digit numbers).

mod builders;
mod directory;
mod registry;
mod ticket;

pub use builders::TicketBuilder;
pub use directory::{Admin, CategoryDirectory, NO_ADMIN_FOUND, default_admins};
pub use registry::{NUMBER_MAX, NUMBER_MIN, NUMBER_SPACE, TicketNumberRegistry};
pub use ticket::{Status, Ticket, TicketDraft, TicketId, TicketNumber};
