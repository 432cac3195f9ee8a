//! Identifier generation.
//!
//! Fresh identifiers (e.g. for a new `Stock`) come from an [`IdGenerator`] so
//! that callers and tests can substitute a deterministic source.

use uuid::Uuid;

/// Source of fresh, unique identifier strings.
pub trait IdGenerator {
    fn generate(&self) -> String;
}

/// Default generator: UUIDv7 (time-ordered) in 32-char simple hex form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::now_v7().simple().to_string()
    }
}

/// Always yields the same identifier. Prefer this in tests for determinism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedIdGenerator(String);

impl FixedIdGenerator {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl IdGenerator for FixedIdGenerator {
    fn generate(&self) -> String {
        self.0.clone()
    }
}
