use prometheus::{IntCounter, IntCounterVec, Opts, Registry};

// ============================================================================
// Metrics - Prometheus counters for observability
// ============================================================================
//
// Registered once at startup and scraped via /metrics on the web server.
// ============================================================================

/// Central metrics registry for the service.
pub struct Metrics {
    registry: Registry,

    /// Orders successfully created, labelled by transport (http/grpc/graphql).
    pub orders_created: IntCounterVec,
    /// Order list requests served, labelled by transport.
    pub orders_listed: IntCounterVec,
    /// Events forwarded to the broker.
    pub broker_published: IntCounter,
    /// Broker publishes that failed.
    pub broker_failures: IntCounter,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let orders_created = IntCounterVec::new(
            Opts::new("orders_created_total", "Orders successfully created"),
            &["transport"],
        )?;
        registry.register(Box::new(orders_created.clone()))?;

        let orders_listed = IntCounterVec::new(
            Opts::new("orders_listed_total", "Order list requests served"),
            &["transport"],
        )?;
        registry.register(Box::new(orders_listed.clone()))?;

        let broker_published = IntCounter::new(
            "broker_events_published_total",
            "Events forwarded to the broker",
        )?;
        registry.register(Box::new(broker_published.clone()))?;

        let broker_failures = IntCounter::new(
            "broker_publish_failures_total",
            "Broker publishes that failed",
        )?;
        registry.register(Box::new(broker_failures.clone()))?;

        Ok(Self {
            registry,
            orders_created,
            orders_listed,
            broker_published,
            broker_failures,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_increment_per_transport() {
        let metrics = Metrics::new().unwrap();

        metrics.orders_created.with_label_values(&["http"]).inc();
        metrics.orders_created.with_label_values(&["grpc"]).inc();
        metrics.orders_created.with_label_values(&["http"]).inc();

        assert_eq!(metrics.orders_created.with_label_values(&["http"]).get(), 2);
        assert_eq!(metrics.orders_created.with_label_values(&["grpc"]).get(), 1);
    }
}
