use anyhow::Result;
use async_trait::async_trait;

use super::entity::Order;

// ============================================================================
// Order Repository Contract
// ============================================================================

/// Persistence capability consumed by the use cases.
///
/// Implementations must be safe for concurrent calls; the three transport
/// front ends share a single instance.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create_order(&self, order: &Order) -> Result<()>;

    async fn get_orders(&self) -> Result<Vec<Order>>;
}
