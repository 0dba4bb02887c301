//! Ticket storage
//!
//! The [`TicketRepository`] trait is the seam the intake surfaces call
//! through; [`MemoryStore`] is the process-lifetime in-memory
//! implementation.

mod memory;
mod repository;

pub use memory::MemoryStore;
pub use repository::TicketRepository;
