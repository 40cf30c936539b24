//! Identifier generators for items, requests and users.

use uuid::Uuid;

use crate::traits::IdGenerator;

/// UUID v7: time-ordered with a random tail, so ids minted in the same
/// millisecond still differ.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn next_id(&mut self) -> Uuid {
        Uuid::now_v7()
    }
}

/// Monotonic counter ids (`00000000-...-0001`, `...-0002`, ...).
/// Deterministic, for tests and scripted demos.
#[derive(Debug, Default, Clone)]
pub struct SequentialIdGenerator {
    next: u128,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting after `last`.
    pub fn starting_after(last: u128) -> Self {
        Self { next: last }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> Uuid {
        self.next += 1;
        Uuid::from_u128(self.next)
    }
}
