//! Unique patron ID allocation
//!
//! IDs are drawn at random from `[0, 10000)` with rejection of 0 and of every
//! value issued before. Issued IDs are never released, so an ID retired by
//! removal is never handed out again.

use crate::domain::{PatronId, RegistryError, Result, MAX_PATRON_ID, MIN_PATRON_ID};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::collections::HashSet;

/// Default number of random draws before falling back to a scan
pub const DEFAULT_MAX_ID_ATTEMPTS: usize = 100_000;

/// Number of distinct IDs available
pub const ID_SPACE: usize = MAX_PATRON_ID as usize;

/// Issues patron IDs from an injectable random source
pub struct IdAllocator {
    used: HashSet<PatronId>,
    rng: Box<dyn RngCore>,
    max_attempts: usize,
}

impl IdAllocator {
    /// Create an allocator seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an allocator drawing from the given random source
    pub fn with_rng(rng: impl RngCore + 'static) -> Self {
        Self {
            used: HashSet::new(),
            rng: Box::new(rng),
            max_attempts: DEFAULT_MAX_ID_ATTEMPTS,
        }
    }

    /// Set the number of random draws made before the fallback scan
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Issue a new, never-before-used ID
    ///
    /// Random draws are bounded by `max_attempts`. When they are spent the
    /// remaining space is scanned from a random starting point, so a free ID
    /// is always found while one exists.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::IdSpaceExhausted`] once all IDs 1-9999 are used.
    pub fn generate(&mut self) -> Result<PatronId> {
        if self.used.len() >= ID_SPACE {
            return Err(RegistryError::IdSpaceExhausted {
                issued: self.used.len(),
            });
        }

        for attempt in 1..=self.max_attempts {
            let candidate: u16 = self.rng.gen_range(0..=MAX_PATRON_ID);
            if candidate < MIN_PATRON_ID {
                continue;
            }
            let id = PatronId::from_value(candidate).map_err(RegistryError::Other)?;
            if self.used.insert(id.clone()) {
                tracing::debug!(patron_id = %id, attempt, "Generated patron ID");
                return Ok(id);
            }
        }

        tracing::warn!(
            max_attempts = self.max_attempts,
            issued = self.used.len(),
            "Random ID draws exhausted, scanning for a free ID"
        );

        let start = self.rng.gen_range(MIN_PATRON_ID..=MAX_PATRON_ID);
        for offset in 0..MAX_PATRON_ID {
            let value = (start - MIN_PATRON_ID + offset) % MAX_PATRON_ID + MIN_PATRON_ID;
            let id = PatronId::from_value(value).map_err(RegistryError::Other)?;
            if self.used.insert(id.clone()) {
                return Ok(id);
            }
        }

        Err(RegistryError::IdSpaceExhausted {
            issued: self.used.len(),
        })
    }

    /// Mark an externally assigned ID as used
    ///
    /// Returns false if it was already used.
    pub fn reserve(&mut self, id: &PatronId) -> bool {
        self.used.insert(id.clone())
    }

    /// True if the ID has ever been issued or reserved
    pub fn is_used(&self, id: &PatronId) -> bool {
        self.used.contains(id)
    }

    /// Number of IDs issued or reserved so far
    pub fn issued(&self) -> usize {
        self.used.len()
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> IdAllocator {
        IdAllocator::with_rng(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_generated_ids_are_distinct_and_in_range() {
        let mut allocator = seeded(42);
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            let id = allocator.generate().unwrap();
            assert!((MIN_PATRON_ID..=MAX_PATRON_ID).contains(&id.value()));
            assert!(seen.insert(id));
        }
        assert_eq!(allocator.issued(), 2000);
    }

    #[test]
    fn test_same_seed_gives_same_sequence() {
        let mut a = seeded(7);
        let mut b = seeded(7);
        for _ in 0..10 {
            assert_eq!(a.generate().unwrap(), b.generate().unwrap());
        }
    }

    #[test]
    fn test_reserved_ids_are_never_issued() {
        let mut allocator = seeded(1).with_max_attempts(0);
        for value in 1..MAX_PATRON_ID {
            assert!(allocator.reserve(&PatronId::from_value(value).unwrap()));
        }
        let id = allocator.generate().unwrap();
        assert_eq!(id.value(), MAX_PATRON_ID);
    }

    #[test]
    fn test_reserve_reports_duplicates() {
        let mut allocator = seeded(3);
        let id = PatronId::new("55").unwrap();
        assert!(allocator.reserve(&id));
        assert!(!allocator.reserve(&id));
        assert!(allocator.is_used(&id));
    }

    #[test]
    fn test_exhausts_whole_space_then_errors() {
        let mut allocator = seeded(9).with_max_attempts(50);
        let mut seen = HashSet::new();
        for _ in 0..ID_SPACE {
            assert!(seen.insert(allocator.generate().unwrap()));
        }
        let err = allocator.generate().unwrap_err();
        assert!(matches!(err, RegistryError::IdSpaceExhausted { issued } if issued == ID_SPACE));
    }
}
