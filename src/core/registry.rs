//! Per-category ticket number registry
//!
//! Issues the human-facing 4-digit tracking numbers. A number must be
//! unique among all numbers already issued for the same category, for the
//! life of the process. Sets are created lazily per category and never
//! cleared.
//!
//! Allocation is rejection sampling over the 1000..=9999 range, with two
//! bounds the naive loop lacks: a full category is refused up front with
//! [`TicketDeskError::NumbersExhausted`], and after a fixed number of
//! colliding draws the allocator falls back to a uniform pick over the
//! remaining free numbers. Expected cost stays at `9000 / (9000 - used)`
//! draws while the category is sparse, and worst case is one scan of the
//! range.

use crate::core::TicketNumber;
use crate::error::{Result, TicketDeskError};
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// Smallest issuable ticket number
pub const NUMBER_MIN: u16 = 1000;

/// Largest issuable ticket number
pub const NUMBER_MAX: u16 = 9999;

/// Total numbers available per category
pub const NUMBER_SPACE: usize = (NUMBER_MAX - NUMBER_MIN + 1) as usize;

/// Random draws before switching to the indexed-scan fallback
const MAX_RANDOM_ATTEMPTS: u32 = 64;

/// Registry of issued ticket numbers, keyed by normalized category
#[derive(Debug, Default)]
pub struct TicketNumberRegistry {
    issued: HashMap<String, HashSet<u16>>,
}

impl TicketNumberRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How many numbers the category has issued so far
    #[must_use]
    pub fn issued(&self, category: &str) -> usize {
        self.issued.get(category).map_or(0, HashSet::len)
    }

    /// How many numbers the category can still issue
    #[must_use]
    pub fn remaining(&self, category: &str) -> usize {
        NUMBER_SPACE - self.issued(category)
    }

    /// Issue a fresh number for the category
    ///
    /// # Errors
    ///
    /// Returns [`TicketDeskError::NumbersExhausted`] once the category has
    /// consumed all 9000 numbers. No state changes on failure.
    pub fn allocate(&mut self, category: &str, rng: &mut impl Rng) -> Result<TicketNumber> {
        let used = self.issued.entry(category.to_string()).or_default();
        if used.len() >= NUMBER_SPACE {
            return Err(TicketDeskError::NumbersExhausted {
                category: category.to_string(),
            });
        }

        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let candidate = rng.gen_range(NUMBER_MIN..=NUMBER_MAX);
            if used.insert(candidate) {
                return Ok(TicketNumber::new(candidate));
            }
        }

        // Dense category: pick uniformly among the free numbers instead of
        // redrawing without bound.
        let mut skip = rng.gen_range(0..NUMBER_SPACE - used.len());
        for candidate in NUMBER_MIN..=NUMBER_MAX {
            if !used.contains(&candidate) {
                if skip == 0 {
                    used.insert(candidate);
                    return Ok(TicketNumber::new(candidate));
                }
                skip -= 1;
            }
        }

        Err(TicketDeskError::NumbersExhausted {
            category: category.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_numbers_stay_in_range() {
        let mut registry = TicketNumberRegistry::new();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let number = registry.allocate("IT", &mut rng).unwrap().value();
            assert!((NUMBER_MIN..=NUMBER_MAX).contains(&number));
        }
    }

    #[test]
    fn test_numbers_unique_within_category() {
        let mut registry = TicketNumberRegistry::new();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();

        for _ in 0..2000 {
            let number = registry.allocate("IT", &mut rng).unwrap();
            assert!(seen.insert(number), "duplicate number {number}");
        }
    }

    #[test]
    fn test_categories_are_independent() {
        let mut registry = TicketNumberRegistry::new();
        let mut rng = StdRng::seed_from_u64(7);

        registry.allocate("IT", &mut rng).unwrap();
        registry.allocate("HR", &mut rng).unwrap();

        assert_eq!(registry.issued("IT"), 1);
        assert_eq!(registry.issued("HR"), 1);
        assert_eq!(registry.issued("FINANCE"), 0);
    }

    #[test]
    fn test_full_space_then_exhaustion() {
        let mut registry = TicketNumberRegistry::new();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();

        // Drain the whole space; every allocation must succeed and be fresh.
        for _ in 0..NUMBER_SPACE {
            let number = registry.allocate("IT", &mut rng).unwrap();
            assert!(seen.insert(number));
        }
        assert_eq!(registry.remaining("IT"), 0);

        // The 9001st request fails instead of spinning.
        let err = registry.allocate("IT", &mut rng).unwrap_err();
        assert!(matches!(
            err,
            TicketDeskError::NumbersExhausted { ref category } if category == "IT"
        ));

        // A different category is unaffected.
        registry.allocate("HR", &mut rng).unwrap();
    }

    #[test]
    fn test_remaining_tracks_issued() {
        let mut registry = TicketNumberRegistry::new();
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(registry.remaining("IT"), NUMBER_SPACE);
        for _ in 0..10 {
            registry.allocate("IT", &mut rng).unwrap();
        }
        assert_eq!(registry.remaining("IT"), NUMBER_SPACE - 10);
    }
}
