//! Event identifier generation.
//!
//! Identity is an injected dependency of the envelope factory so that event
//! construction can be made fully deterministic in tests.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::event::EventId;

/// Source of fresh, never-repeating event identifiers.
pub trait IdGenerator: Send + Sync {
    /// Issue the next identifier.
    fn next_id(&self) -> EventId;
}

/// Production generator issuing UUIDv7 identifiers (time-ordered, random tail).
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> EventId {
        EventId::from_uuid(Uuid::now_v7())
    }
}

/// Deterministic generator yielding `1, 2, 3, ...` encoded as UUIDs.
///
/// Starts at 1 so the nil UUID is never issued.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Create a generator whose first id is `1`.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a generator whose first id is `start` (clamped to at least 1).
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start.max(1)),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> EventId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        EventId::from_uuid(Uuid::from_u128(n as u128))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn uuid_generator_never_repeats() {
        let generator = UuidGenerator;
        let ids: HashSet<EventId> = (0..1000).map(|_| generator.next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn uuid_generator_is_not_nil() {
        assert!(!UuidGenerator.next_id().is_nil());
    }

    #[test]
    fn sequential_generator_counts_up() {
        let generator = SequentialIdGenerator::new();
        assert_eq!(generator.next_id().as_uuid().as_u128(), 1);
        assert_eq!(generator.next_id().as_uuid().as_u128(), 2);
        assert_eq!(generator.next_id().as_uuid().as_u128(), 3);
    }

    #[test]
    fn sequential_generator_skips_nil() {
        let generator = SequentialIdGenerator::starting_at(0);
        assert!(!generator.next_id().is_nil());
    }
}
