//! Stock: how many copies of one book are on hand.

mod id;
mod quantity;
mod status;

pub use self::{id::StockId, quantity::QuantityAvailable, status::Status};

use serde::{Deserialize, Serialize};

use bookstore_core::{DomainError, DomainResult, Entity, IdGenerator};

/// Stock entity. Owned by exactly one [`Book`](crate::Book) and never shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    id: StockId,
    quantity: QuantityAvailable,
    status: Status,
}

impl Stock {
    /// Empty stock under a freshly generated id.
    pub fn create() -> Self {
        Self::empty(StockId::generate())
    }

    /// Empty stock whose id comes from `ids`.
    pub fn create_with(ids: &dyn IdGenerator) -> DomainResult<Self> {
        Ok(Self::empty(StockId::generate_with(ids)?))
    }

    /// Rebuild previously persisted stock as-is.
    pub fn reconstruct(id: StockId, quantity: QuantityAvailable, status: Status) -> Self {
        Self {
            id,
            quantity,
            status,
        }
    }

    fn empty(id: StockId) -> Self {
        Self {
            id,
            quantity: QuantityAvailable::ZERO,
            status: Status::OutOfStock,
        }
    }

    pub fn id(&self) -> &StockId {
        &self.id
    }

    pub fn quantity(&self) -> QuantityAvailable {
        self.quantity
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Sellable: something on hand and not flagged out of stock.
    pub fn is_available(&self) -> bool {
        !self.quantity.is_zero() && self.status != Status::OutOfStock
    }

    pub fn increase_quantity(&mut self, amount: u32) -> DomainResult<()> {
        ensure_positive(amount)?;
        let quantity = self.quantity.increment(amount)?;
        self.set_quantity(quantity);
        Ok(())
    }

    pub fn decrease_quantity(&mut self, amount: u32) -> DomainResult<()> {
        ensure_positive(amount)?;
        let quantity = self.quantity.decrement(amount)?;
        self.set_quantity(quantity);
        Ok(())
    }

    /// Override the status without touching the quantity.
    pub fn change_status(&mut self, status: Status) {
        self.status = status;
    }

    fn set_quantity(&mut self, quantity: QuantityAvailable) {
        let status = Status::from_quantity(quantity.value());
        if status != self.status {
            tracing::debug!(
                stock_id = %self.id,
                from = ?self.status,
                to = ?status,
                "stock status changed"
            );
        }
        self.quantity = quantity;
        self.status = status;
    }
}

impl Entity for Stock {
    type Id = StockId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn ensure_positive(amount: u32) -> DomainResult<()> {
    if amount == 0 {
        return Err(DomainError::validation("amount must be a positive integer"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::{Entity, FixedIdGenerator};

    fn stock_with(quantity: u32, status: Status) -> Stock {
        Stock::reconstruct(
            StockId::new("abc").unwrap(),
            QuantityAvailable::new(quantity).unwrap(),
            status,
        )
    }

    #[test]
    fn create_starts_empty_and_out_of_stock() {
        let stock = Stock::create();
        assert!(stock.quantity().is_zero());
        assert_eq!(stock.status(), Status::OutOfStock);
        assert!(!stock.is_available());
    }

    #[test]
    fn create_with_takes_id_from_generator() {
        let ids = FixedIdGenerator::new("testIdWithExactLength");
        let stock = Stock::create_with(&ids).unwrap();
        assert_eq!(stock.id().as_str(), "testIdWithExactLength");
    }

    #[test]
    fn reconstruct_keeps_given_values() {
        let stock = stock_with(100, Status::InStock);
        assert_eq!(stock.id().as_str(), "abc");
        assert_eq!(stock.quantity().value(), 100);
        assert_eq!(stock.status(), Status::InStock);
        assert!(stock.is_available());
    }

    #[test]
    fn increase_rederives_status() {
        let mut stock = Stock::create();
        stock.increase_quantity(5).unwrap();
        assert_eq!(stock.quantity().value(), 5);
        assert_eq!(stock.status(), Status::LowStock);

        stock.increase_quantity(20).unwrap();
        assert_eq!(stock.quantity().value(), 25);
        assert_eq!(stock.status(), Status::InStock);
    }

    #[test]
    fn decrease_to_zero_marks_out_of_stock() {
        let mut stock = stock_with(10, Status::LowStock);
        stock.decrease_quantity(10).unwrap();
        assert!(stock.quantity().is_zero());
        assert_eq!(stock.status(), Status::OutOfStock);
        assert!(!stock.is_available());
    }

    #[test]
    fn zero_amount_is_rejected() {
        let mut stock = stock_with(100, Status::InStock);
        assert!(matches!(stock.increase_quantity(0), Err(DomainError::Validation(_))));
        assert!(matches!(stock.decrease_quantity(0), Err(DomainError::Validation(_))));
        assert_eq!(stock.quantity().value(), 100);
    }

    #[test]
    fn decrease_beyond_quantity_fails_and_leaves_stock_untouched() {
        let mut stock = stock_with(3, Status::LowStock);
        let err = stock.decrease_quantity(4).unwrap_err();
        assert_eq!(err, DomainError::insufficient_stock(4, 3));
        assert_eq!(stock.quantity().value(), 3);
        assert_eq!(stock.status(), Status::LowStock);
    }

    #[test]
    fn increase_beyond_max_fails() {
        let mut stock = stock_with(QuantityAvailable::MAX, Status::InStock);
        assert!(stock.increase_quantity(1).is_err());
        assert_eq!(stock.quantity().value(), QuantityAvailable::MAX);
    }

    #[test]
    fn availability_needs_quantity_and_status() {
        assert!(!stock_with(100, Status::OutOfStock).is_available());
        assert!(!stock_with(0, Status::InStock).is_available());
        assert!(stock_with(1, Status::LowStock).is_available());
    }

    #[test]
    fn identity_survives_quantity_changes() {
        let before = stock_with(100, Status::InStock);
        let mut after = before.clone();
        after.decrease_quantity(100).unwrap();
        assert_ne!(before, after);
        assert!(before.same_identity_as(&after));
        assert!(!before.same_identity_as(&Stock::create()));
    }

    #[test]
    fn change_status_keeps_quantity() {
        let mut stock = stock_with(100, Status::InStock);
        stock.change_status(Status::OutOfStock);
        assert_eq!(stock.quantity().value(), 100);
        assert!(!stock.is_available());
    }

    #[test]
    fn deserialization_validates_fields() {
        let json = r#"{"id":"abc","quantity":100,"status":"in_stock"}"#;
        let stock: Stock = serde_json::from_str(json).unwrap();
        assert_eq!(stock, stock_with(100, Status::InStock));

        let bad = r#"{"id":"","quantity":100,"status":"in_stock"}"#;
        assert!(serde_json::from_str::<Stock>(bad).is_err());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: after any sequence of mutations, zero quantity is never available
            /// and the status matches the quantity.
            #[test]
            fn mutations_keep_status_consistent(
                ops in proptest::collection::vec((any::<bool>(), 0u32..50), 0..40)
            ) {
                let mut stock = Stock::create();
                for (increase, amount) in ops {
                    let before = stock.clone();
                    let result = if increase {
                        stock.increase_quantity(amount)
                    } else {
                        stock.decrease_quantity(amount)
                    };
                    if result.is_err() {
                        prop_assert_eq!(&stock, &before);
                    }
                    prop_assert_eq!(stock.status(), Status::from_quantity(stock.quantity().value()));
                    if stock.quantity().is_zero() {
                        prop_assert!(!stock.is_available());
                    }
                }
            }
        }
    }
}
