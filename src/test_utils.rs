//! Test utilities for ticketdesk
//!
//! Common fixtures to reduce duplication in test code across the
//! codebase.

#![cfg(test)]

use crate::core::{CategoryDirectory, TicketDraft};
use crate::store::MemoryStore;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A store with the stock directory and a deterministic RNG
pub fn seeded_store() -> MemoryStore {
    MemoryStore::with_rng(CategoryDirectory::default(), StdRng::seed_from_u64(42))
}

/// A valid draft for the given category
pub fn sample_draft(category: &str) -> TicketDraft {
    TicketDraft::new("Sample ticket", "Something is broken", category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TicketRepository;

    #[test]
    fn test_seeded_store_accepts_sample_draft() {
        let store = seeded_store();
        let ticket = store.create(sample_draft("it")).unwrap();
        assert_eq!(ticket.category, "IT");
    }
}
