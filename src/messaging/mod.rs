// ============================================================================
// Broker Forwarding
// ============================================================================
//
// The production side-effect path for order creation: a Kafka producer and
// the one event handler that forwards dispatched events to it. The use case
// never imports anything from this module; it reaches the handler only
// through the dispatcher registry.
//
// ============================================================================

mod kafka;
mod order_created_handler;

pub use kafka::KafkaClient;
pub use order_created_handler::OrderCreatedHandler;
