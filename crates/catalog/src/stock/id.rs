use serde::{Deserialize, Serialize};

use bookstore_core::{DomainError, DomainResult, IdGenerator, UuidIdGenerator, ValueObject};

/// Identifier of a [`Stock`](crate::Stock) record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StockId(String);

impl StockId {
    pub const MAX_LENGTH: usize = 100;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let len = value.chars().count();
        if len == 0 {
            return Err(DomainError::invalid_id("StockId: cannot be empty"));
        }
        if len > Self::MAX_LENGTH {
            return Err(DomainError::invalid_id(format!(
                "StockId: must be at most {} characters (got {len})",
                Self::MAX_LENGTH
            )));
        }
        Ok(Self(value))
    }

    /// Fresh identifier from the default UUIDv7 generator.
    pub fn generate() -> Self {
        // 32 hex chars, always within bounds.
        Self(UuidIdGenerator.generate())
    }

    /// Fresh identifier from a caller-supplied generator.
    pub fn generate_with(ids: &dyn IdGenerator) -> DomainResult<Self> {
        Self::new(ids.generate())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for StockId {}

impl core::fmt::Display for StockId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for StockId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StockId> for String {
    fn from(value: StockId) -> Self {
        value.0
    }
}
