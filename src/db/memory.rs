//! In-memory order store for tests/dev.

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::order::{Order, OrderRepository};

/// Keeps orders in a plain `Vec`, in insertion order.
#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Mutex<Vec<Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create_order(&self, order: &Order) -> Result<()> {
        self.orders
            .lock()
            .map_err(|_| anyhow::anyhow!("orders lock poisoned"))?
            .push(order.clone());
        Ok(())
    }

    async fn get_orders(&self) -> Result<Vec<Order>> {
        Ok(self
            .orders
            .lock()
            .map_err(|_| anyhow::anyhow!("orders lock poisoned"))?
            .clone())
    }
}
