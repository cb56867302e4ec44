use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::events::DomainEvent;

use super::entity::Order;

// ============================================================================
// Order Events
// ============================================================================

/// Stable routing key for order creation events.
pub const ORDER_CREATED: &str = "OrderCreated";

/// Order Created - snapshot of a successfully created order.
///
/// Built by the create-order use case immediately before dispatch and dropped
/// once every handler has run. The event itself is never persisted
/// (fire-and-forget).
#[derive(Debug, Clone, Serialize)]
pub struct OrderCreated {
    pub event_id: Uuid,
    pub order_id: String,
    pub price: f64,
    pub tax: f64,
    pub final_price: f64,
    pub occurred_at: DateTime<Utc>,
}

impl OrderCreated {
    pub fn new(order: &Order) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            order_id: order.id.clone(),
            price: order.price,
            tax: order.tax,
            final_price: order.final_price,
            occurred_at: Utc::now(),
        }
    }
}

impl DomainEvent for OrderCreated {
    fn name(&self) -> &'static str {
        ORDER_CREATED
    }

    /// The order's output fields, keyed the same way every transport keys
    /// them on the wire.
    fn payload(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.order_id,
            "price": self.price,
            "tax": self.tax,
            "final_price": self.final_price,
        })
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
