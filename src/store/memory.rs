//! In-memory ticket store
//!
//! Owns every piece of mutable state in the tracker: the sequential id
//! counter, the ticket-number registry, and the ordered ticket list. All
//! of it lives behind one mutex, so concurrent intake surfaces (the HTTP
//! handlers share the store via `Arc`) cannot race on counter increments,
//! registry inserts, or list appends. Nothing is persisted; a restart
//! starts empty.

use crate::core::{
    CategoryDirectory, NO_ADMIN_FOUND, Ticket, TicketBuilder, TicketDraft, TicketId,
    TicketNumberRegistry,
};
use crate::error::{Result, TicketDeskError};
use crate::store::TicketRepository;
use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

struct StoreInner {
    counter: u64,
    registry: TicketNumberRegistry,
    tickets: Vec<Ticket>,
    rng: StdRng,
}

/// The single in-memory ticket store
pub struct MemoryStore {
    directory: CategoryDirectory,
    inner: Mutex<StoreInner>,
}

impl MemoryStore {
    /// Create an empty store over the given directory
    #[must_use]
    pub fn new(directory: CategoryDirectory) -> Self {
        Self::with_rng(directory, StdRng::from_entropy())
    }

    /// Create an empty store with a caller-provided RNG
    ///
    /// Tests seed this for deterministic number allocation.
    #[must_use]
    pub fn with_rng(directory: CategoryDirectory, rng: StdRng) -> Self {
        Self {
            directory,
            inner: Mutex::new(StoreInner {
                counter: 0,
                registry: TicketNumberRegistry::new(),
                tickets: Vec::new(),
                rng,
            }),
        }
    }

    /// The directory this store validates categories against
    #[must_use]
    pub const fn directory(&self) -> &CategoryDirectory {
        &self.directory
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>> {
        self.inner
            .lock()
            .map_err(|_| TicketDeskError::custom("ticket store lock poisoned"))
    }

    /// Trim the draft and reject empty fields or unknown categories
    ///
    /// Runs before any state is touched, so a rejected draft consumes
    /// neither an id nor a ticket number.
    fn validate(&self, draft: &TicketDraft) -> Result<(String, String, String)> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(TicketDeskError::EmptyField { field: "name" });
        }

        let description = draft.description.trim();
        if description.is_empty() {
            return Err(TicketDeskError::EmptyField {
                field: "description",
            });
        }

        if !self.directory.is_valid(&draft.category) {
            return Err(TicketDeskError::InvalidCategory {
                category: draft.category.trim().to_string(),
            });
        }

        Ok((
            name.to_string(),
            description.to_string(),
            CategoryDirectory::normalize(&draft.category),
        ))
    }
}

impl TicketRepository for MemoryStore {
    fn create(&self, draft: TicketDraft) -> Result<Ticket> {
        let (name, description, category) = self.validate(&draft)?;

        let assigned_to = self
            .directory
            .resolve_admin(&category)
            .unwrap_or(NO_ADMIN_FOUND)
            .to_string();

        let mut inner = self.lock()?;
        let StoreInner { registry, rng, .. } = &mut *inner;
        let number = registry.allocate(&category, rng)?;
        inner.counter += 1;

        let ticket = TicketBuilder::new()
            .id(TicketId::new(inner.counter))
            .number(number)
            .name(name)
            .description(description)
            .category(category)
            .assigned_to(assigned_to)
            .created_at(Utc::now())
            .build();

        debug!(id = %ticket.id, number = %ticket.number, category = %ticket.category, "ticket created");
        inner.tickets.push(ticket.clone());
        Ok(ticket)
    }

    fn find_by_id(&self, id: TicketId) -> Result<Ticket> {
        let inner = self.lock()?;
        inner
            .tickets
            .iter()
            .find(|ticket| ticket.id == id)
            .cloned()
            .ok_or(TicketDeskError::TicketNotFound { id: id.value() })
    }

    fn all(&self) -> Result<Vec<Ticket>> {
        Ok(self.lock()?.tickets.clone())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.lock()?.tickets.len())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(CategoryDirectory::default())
    }
}
