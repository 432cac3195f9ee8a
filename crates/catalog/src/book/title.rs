use serde::{Deserialize, Serialize};

use bookstore_core::{DomainError, DomainResult, ValueObject};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    pub const MAX_LENGTH: usize = 1000;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("title cannot be empty"));
        }
        let len = value.chars().count();
        if len > Self::MAX_LENGTH {
            return Err(DomainError::validation(format!(
                "title must be at most {} characters (got {len})",
                Self::MAX_LENGTH
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Title {}

impl core::fmt::Display for Title {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Title {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Title> for String {
    fn from(value: Title) -> Self {
        value.0
    }
}
