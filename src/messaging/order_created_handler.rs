use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::events::{DomainEvent, EventHandler};
use crate::metrics::Metrics;

use super::kafka::KafkaClient;

// ============================================================================
// Order Created Handler - forwards dispatched events to the broker
// ============================================================================

/// Serializes the event payload to JSON and publishes it to the orders
/// topic, keyed by event name.
///
/// Registered under `ORDER_CREATED` at startup; the dispatcher is the only
/// path by which this type is ever invoked. A publish failure propagates
/// back through the dispatch chain to the request that created the order.
pub struct OrderCreatedHandler {
    client: Arc<KafkaClient>,
    topic: String,
    metrics: Arc<Metrics>,
}

impl OrderCreatedHandler {
    pub fn new(client: Arc<KafkaClient>, topic: impl Into<String>, metrics: Arc<Metrics>) -> Self {
        Self {
            client,
            topic: topic.into(),
            metrics,
        }
    }

    fn message(event: &dyn DomainEvent) -> Result<String> {
        Ok(serde_json::to_string(&event.payload())?)
    }
}

#[async_trait]
impl EventHandler for OrderCreatedHandler {
    async fn handle(&self, event: &dyn DomainEvent) -> Result<()> {
        let payload = Self::message(event)?;

        match self.client.publish(&self.topic, event.name(), &payload).await {
            Ok(()) => {
                self.metrics.broker_published.inc();
                Ok(())
            }
            Err(e) => {
                self.metrics.broker_failures.inc();
                tracing::error!(
                    error = %e,
                    topic = %self.topic,
                    "failed to forward event to broker"
                );
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::order::{Order, OrderCreated};

    #[test]
    fn message_carries_the_order_snapshot() {
        let order = Order::new("order-1", 100.0, 10.0).unwrap();
        let event = OrderCreated::new(&order);

        let message = OrderCreatedHandler::message(&event).unwrap();
        let value: serde_json::Value = serde_json::from_str(&message).unwrap();

        assert_eq!(value["id"], "order-1");
        assert_eq!(value["price"], 100.0);
        assert_eq!(value["tax"], 10.0);
        assert_eq!(value["final_price"], 110.0);
    }
}
