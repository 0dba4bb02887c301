use crate::core::{Ticket, TicketDraft, TicketId};
use crate::error::Result;

/// Repository trait for ticket storage operations
///
/// This trait defines the interface the intake surfaces (console menu,
/// HTTP API) program against, allowing for different storage
/// implementations.
pub trait TicketRepository: Send + Sync {
    /// Validates a draft and creates the ticket, assigning the next
    /// sequential id, a fresh per-category tracking number, the owning
    /// admin, and the creation timestamp
    fn create(&self, draft: TicketDraft) -> Result<Ticket>;

    /// Loads a ticket by id
    fn find_by_id(&self, id: TicketId) -> Result<Ticket>;

    /// Loads all tickets in creation order
    fn all(&self) -> Result<Vec<Ticket>>;

    /// Counts stored tickets
    fn count(&self) -> Result<usize>;
}
