// ============================================================================
// Use Cases - Transport-Agnostic Entry Points
// ============================================================================
//
// The REST handler, the gRPC service, and the GraphQL resolvers all call the
// same two objects below; the DTOs are the only shapes that cross that
// boundary. The use cases know the repository and dispatcher contracts, never
// a protocol or a broker.
//
// ============================================================================

pub mod create_order;
pub mod list_orders;

pub use create_order::CreateOrderUseCase;
pub use list_orders::ListOrdersUseCase;

use serde::{Deserialize, Serialize};

use crate::domain::order::Order;

/// Input crossing the use-case boundary, identical for every transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderInput {
    pub id: String,
    pub price: f64,
    pub tax: f64,
}

/// Output mirror of a persisted order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderOutput {
    pub id: String,
    pub price: f64,
    pub tax: f64,
    pub final_price: f64,
}

impl From<&Order> for OrderOutput {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            price: order.price,
            tax: order.tax,
            final_price: order.final_price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersOutput {
    pub orders: Vec<OrderOutput>,
}
