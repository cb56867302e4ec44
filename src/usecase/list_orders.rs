use std::sync::Arc;

use anyhow::Result;

use crate::domain::order::OrderRepository;

use super::{OrderOutput, OrdersOutput};

// ============================================================================
// List Orders Use Case
// ============================================================================

/// Fetch every order and map it to the output representation.
///
/// Reads raise no events.
pub struct ListOrdersUseCase {
    repository: Arc<dyn OrderRepository>,
}

impl ListOrdersUseCase {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_orders(&self) -> Result<OrdersOutput> {
        let orders = self.repository.get_orders().await?;

        Ok(OrdersOutput {
            orders: orders.iter().map(OrderOutput::from).collect(),
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
