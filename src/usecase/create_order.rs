use std::sync::Arc;

use anyhow::Result;

use crate::domain::order::{Order, OrderCreated, OrderRepository};
use crate::events::EventDispatcher;

use super::{OrderInput, OrderOutput};

// ============================================================================
// Create Order Use Case
// ============================================================================

/// Orchestrates order creation: construct the entity, persist it, then
/// notify whoever is listening.
///
/// The dispatcher's handler set decides how many downstream actions happen;
/// this type never learns who is subscribed. Exactly one dispatch per
/// successful execute, and none at all when persistence fails - creation and
/// notification are not atomic, but notification never happens without a
/// successful persist.
pub struct CreateOrderUseCase {
    repository: Arc<dyn OrderRepository>,
    dispatcher: Arc<EventDispatcher>,
}

impl CreateOrderUseCase {
    pub fn new(repository: Arc<dyn OrderRepository>, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    pub async fn execute(&self, input: OrderInput) -> Result<OrderOutput> {
        let order = Order::new(input.id, input.price, input.tax)?;

        self.repository.create_order(&order).await?;

        let event = OrderCreated::new(&order);
        self.dispatcher.dispatch(&event).await?;

        tracing::debug!(order_id = %order.id, final_price = order.final_price, "order created");
        Ok(OrderOutput::from(&order))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use anyhow::bail;
    use async_trait::async_trait;

    use crate::db::InMemoryOrderRepository;
    use crate::domain::order::ORDER_CREATED;
    use crate::events::{DomainEvent, EventHandler};

    #[derive(Default)]
    struct SpyHandler {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl EventHandler for SpyHandler {
        async fn handle(&self, _event: &dyn DomainEvent) -> anyhow::Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingRepository;

    #[async_trait]
    impl OrderRepository for FailingRepository {
        async fn create_order(&self, _order: &Order) -> anyhow::Result<()> {
            bail!("connection reset")
        }

        async fn get_orders(&self) -> anyhow::Result<Vec<Order>> {
            bail!("connection reset")
        }
    }

    fn input() -> OrderInput {
        OrderInput {
            id: "order-1".to_string(),
            price: 100.0,
            tax: 10.0,
        }
    }

    #[tokio::test]
    async fn execute_persists_and_dispatches_exactly_once() {
        let repository = Arc::new(InMemoryOrderRepository::new());
        let dispatcher = Arc::new(EventDispatcher::new());
        let spy = Arc::new(SpyHandler::default());
        dispatcher.register(ORDER_CREATED, spy.clone()).await.unwrap();

        let use_case = CreateOrderUseCase::new(repository.clone(), dispatcher);
        let output = use_case.execute(input()).await.unwrap();

        assert_eq!(output.id, "order-1");
        assert_eq!(output.price, 100.0);
        assert_eq!(output.tax, 10.0);
        assert_eq!(output.final_price, 110.0);
        assert_eq!(spy.calls.load(Ordering::SeqCst), 1);
        assert_eq!(repository.get_orders().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn repository_failure_skips_dispatch() {
        let dispatcher = Arc::new(EventDispatcher::new());
        let spy = Arc::new(SpyHandler::default());
        dispatcher.register(ORDER_CREATED, spy.clone()).await.unwrap();

        let use_case = CreateOrderUseCase::new(Arc::new(FailingRepository), dispatcher);
        let err = use_case.execute(input()).await.unwrap_err();

        assert!(err.to_string().contains("connection reset"));
        assert_eq!(spy.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_id_never_reaches_the_repository() {
        let repository = Arc::new(InMemoryOrderRepository::new());
        let dispatcher = Arc::new(EventDispatcher::new());
        let spy = Arc::new(SpyHandler::default());
        dispatcher.register(ORDER_CREATED, spy.clone()).await.unwrap();

        let use_case = CreateOrderUseCase::new(repository.clone(), dispatcher);
        let result = use_case
            .execute(OrderInput {
                id: String::new(),
                price: 1.0,
                tax: 1.0,
            })
            .await;

        assert!(result.is_err());
        assert!(repository.get_orders().await.unwrap().is_empty());
        assert_eq!(spy.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn handler_failure_surfaces_to_the_caller() {
        struct BrokenHandler;

        #[async_trait]
        impl EventHandler for BrokenHandler {
            async fn handle(&self, _event: &dyn DomainEvent) -> anyhow::Result<()> {
                bail!("broker down")
            }
        }

        let repository = Arc::new(InMemoryOrderRepository::new());
        let dispatcher = Arc::new(EventDispatcher::new());
        dispatcher.register(ORDER_CREATED, Arc::new(BrokenHandler)).await.unwrap();

        let use_case = CreateOrderUseCase::new(repository.clone(), dispatcher);
        let err = use_case.execute(input()).await.unwrap_err();

        // The order was persisted before dispatch failed; no rollback exists.
        assert!(err.to_string().contains("OrderCreated"));
        assert_eq!(repository.get_orders().await.unwrap().len(), 1);
    }
}
