use serde::{Deserialize, Serialize};

use bookstore_core::{DomainError, DomainResult, ValueObject};

/// Book identifier: an ISBN-10 or ISBN-13 without separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookId(String);

impl BookId {
    pub const MIN_LENGTH: usize = 10;
    pub const MAX_LENGTH: usize = 100;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let len = value.chars().count();
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&len) {
            return Err(DomainError::validation(format!(
                "BookId must be between {} and {} characters (got {len})",
                Self::MIN_LENGTH,
                Self::MAX_LENGTH
            )));
        }
        if !is_valid_isbn10(&value) && !is_valid_isbn13(&value) {
            return Err(DomainError::invalid_id(format!("BookId: not a valid ISBN: {value}")));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hyphenated display form, e.g. `ISBN978-4-16-715805-7`.
    pub fn to_isbn(&self) -> String {
        let s = self.0.as_str();
        if s.len() == 13 {
            format!("ISBN{}-{}-{}-{}-{}", &s[0..3], &s[3..4], &s[4..6], &s[6..12], &s[12..13])
        } else {
            format!("ISBN{}-{}-{}-{}", &s[0..1], &s[1..3], &s[3..9], &s[9..10])
        }
    }
}

// Nine digits, then a digit or `X` (= 10), weighted 10..=1, sum divisible by 11.
fn is_valid_isbn10(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    let mut sum = 0u32;
    for (i, &b) in bytes.iter().enumerate() {
        let digit = match b {
            b'0'..=b'9' => u32::from(b - b'0'),
            b'X' if i == 9 => 10,
            _ => return false,
        };
        sum += digit * (10 - i as u32);
    }
    sum % 11 == 0
}

// 978/979 prefix, weights alternate 1 and 3, sum divisible by 10.
fn is_valid_isbn13(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 13 || !(s.starts_with("978") || s.starts_with("979")) {
        return false;
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let sum: u32 = bytes
        .iter()
        .enumerate()
        .map(|(i, &b)| u32::from(b - b'0') * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    sum % 10 == 0
}

impl ValueObject for BookId {}

impl core::fmt::Display for BookId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::str::FromStr for BookId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for BookId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BookId> for String {
    fn from(value: BookId) -> Self {
        value.0
    }
}
