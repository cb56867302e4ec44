use serde::{Deserialize, Serialize};

use super::errors::OrderError;

// ============================================================================
// Order Entity
// ============================================================================

/// An order: a caller-supplied id plus an amount and its tax.
///
/// `final_price` is always recomputed from `price + tax` at construction and
/// never written independently; an order whose final price disagrees with
/// that sum is invalid. Orders are constructed once, persisted once, and
/// immutable afterwards - there are no update or delete operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub price: f64,
    pub tax: f64,
    pub final_price: f64,
}

impl Order {
    /// Build an order, deriving the final price.
    ///
    /// The id is a business key supplied by the caller, never generated here.
    pub fn new(id: impl Into<String>, price: f64, tax: f64) -> Result<Self, OrderError> {
        let id = id.into();
        if id.is_empty() {
            return Err(OrderError::EmptyId);
        }

        Ok(Self {
            id,
            price,
            tax,
            final_price: price + tax,
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_price_is_price_plus_tax() {
        let order = Order::new("order-1", 100.0, 10.0).unwrap();

        assert_eq!(order.id, "order-1");
        assert_eq!(order.price, 100.0);
        assert_eq!(order.tax, 10.0);
        assert_eq!(order.final_price, 110.0);
    }

    #[test]
    fn zero_amounts_are_allowed() {
        let order = Order::new("order-2", 0.0, 0.0).unwrap();
        assert_eq!(order.final_price, 0.0);
    }

    #[test]
    fn empty_id_is_rejected() {
        let err = Order::new("", 10.0, 1.0).unwrap_err();
        assert!(matches!(err, OrderError::EmptyId));
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let order = Order::new("order-1", 100.5, 0.5).unwrap();
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["id"], "order-1");
        assert_eq!(json["final_price"], 101.0);
    }
}
