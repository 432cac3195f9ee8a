use serde::{Deserialize, Serialize};

use bookstore_core::{DomainError, DomainResult, ValueObject};

/// Number of copies on hand. Never negative, never above [`Self::MAX`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct QuantityAvailable(u32);

impl QuantityAvailable {
    pub const MAX: u32 = 1_000_000;
    pub const ZERO: Self = Self(0);

    pub fn new(value: u32) -> DomainResult<Self> {
        if value > Self::MAX {
            return Err(DomainError::validation(format!(
                "quantity must be at most {} (got {value})",
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn increment(self, amount: u32) -> DomainResult<Self> {
        let next = self.0.checked_add(amount).ok_or_else(|| {
            DomainError::validation(format!("quantity must be at most {}", Self::MAX))
        })?;
        Self::new(next)
    }

    pub fn decrement(self, amount: u32) -> DomainResult<Self> {
        let next = self
            .0
            .checked_sub(amount)
            .ok_or(DomainError::insufficient_stock(amount, self.0))?;
        Ok(Self(next))
    }
}

impl ValueObject for QuantityAvailable {}

impl core::fmt::Display for QuantityAvailable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<u32> for QuantityAvailable {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuantityAvailable> for u32 {
    fn from(value: QuantityAvailable) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds_and_rejects_above_max() {
        assert!(QuantityAvailable::new(0).unwrap().is_zero());
        assert_eq!(QuantityAvailable::new(1_000_000).unwrap().value(), 1_000_000);
        assert!(matches!(
            QuantityAvailable::new(1_000_001),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn decrement_below_zero_reports_insufficient_stock() {
        let q = QuantityAvailable::new(5).unwrap();
        assert_eq!(q.decrement(5).unwrap(), QuantityAvailable::ZERO);
        assert_eq!(
            q.decrement(6),
            Err(DomainError::InsufficientStock {
                requested: 6,
                available: 5
            })
        );
    }

    #[test]
    fn increment_past_max_fails() {
        let q = QuantityAvailable::new(QuantityAvailable::MAX).unwrap();
        assert!(q.increment(1).is_err());
        assert!(q.increment(u32::MAX).is_err());
    }

    #[test]
    fn deserialization_enforces_bounds() {
        let ok: QuantityAvailable = serde_json::from_str("100").unwrap();
        assert_eq!(ok.value(), 100);
        assert!(serde_json::from_str::<QuantityAvailable>("2000000").is_err());
        assert!(serde_json::from_str::<QuantityAvailable>("-1").is_err());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: increment then decrement by the same amount is the identity.
            #[test]
            fn increment_then_decrement_round_trips(
                start in 0u32..=QuantityAvailable::MAX,
                amount in 0u32..=QuantityAvailable::MAX,
            ) {
                let q = QuantityAvailable::new(start).unwrap();
                match q.increment(amount) {
                    Ok(up) => {
                        prop_assert_eq!(up.decrement(amount).unwrap(), q);
                    }
                    Err(_) => {
                        prop_assert!(u64::from(start) + u64::from(amount) > u64::from(QuantityAvailable::MAX));
                    }
                }
            }
        }
    }
}
