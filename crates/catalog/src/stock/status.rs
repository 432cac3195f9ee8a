use serde::{Deserialize, Serialize};

use bookstore_core::ValueObject;

/// Coarse availability of a stock record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    InStock,
    LowStock,
    OutOfStock,
}

impl Status {
    /// Quantities up to and including this count as low stock.
    pub const LOW_STOCK_THRESHOLD: u32 = 10;

    /// Status implied by a quantity on hand.
    pub fn from_quantity(quantity: u32) -> Self {
        match quantity {
            0 => Status::OutOfStock,
            q if q <= Self::LOW_STOCK_THRESHOLD => Status::LowStock,
            _ => Status::InStock,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::InStock => "In stock",
            Status::LowStock => "Low stock",
            Status::OutOfStock => "Out of stock",
        }
    }
}

impl ValueObject for Status {}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_quantity_uses_low_stock_threshold() {
        assert_eq!(Status::from_quantity(0), Status::OutOfStock);
        assert_eq!(Status::from_quantity(1), Status::LowStock);
        assert_eq!(Status::from_quantity(10), Status::LowStock);
        assert_eq!(Status::from_quantity(11), Status::InStock);
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(serde_json::to_string(&Status::OutOfStock).unwrap(), "\"out_of_stock\"");
        let s: Status = serde_json::from_str("\"in_stock\"").unwrap();
        assert_eq!(s, Status::InStock);
    }
}
