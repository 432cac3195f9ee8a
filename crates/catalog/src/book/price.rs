use serde::{Deserialize, Serialize};

use bookstore_core::{DomainError, DomainResult, ValueObject};

/// Selling price in the smallest unit of `currency` (e.g. yen, cents).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPrice")]
pub struct Price {
    amount: u64,
    currency: String,
}

impl Price {
    pub const MAX_AMOUNT: u64 = 1_000_000;

    pub fn new(amount: i64, currency: impl Into<String>) -> DomainResult<Self> {
        let currency = currency.into();
        let amount = u64::try_from(amount)
            .map_err(|_| DomainError::validation(format!("price cannot be negative (got {amount})")))?;
        if amount > Self::MAX_AMOUNT {
            return Err(DomainError::validation(format!(
                "price must be at most {} (got {amount})",
                Self::MAX_AMOUNT
            )));
        }
        // ISO-4217 shape only; the list of codes is not checked.
        if currency.len() != 3 || !currency.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(DomainError::validation(format!(
                "currency must be a three-letter uppercase code (got {currency:?})"
            )));
        }
        Ok(Self { amount, currency })
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[derive(Deserialize)]
struct RawPrice {
    amount: i64,
    currency: String,
}

impl TryFrom<RawPrice> for Price {
    type Error = DomainError;

    fn try_from(raw: RawPrice) -> Result<Self, Self::Error> {
        Self::new(raw.amount, raw.currency)
    }
}
