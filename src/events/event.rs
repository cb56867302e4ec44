use chrono::{DateTime, Utc};

// ============================================================================
// Domain Event Trait
// ============================================================================

/// A domain event routed by the dispatcher.
///
/// The name is the sole routing key: if two different event types ever share
/// a name, they are delivered to the same handlers, and handlers are expected
/// to check the payload shape themselves. That sharp edge is deliberate and
/// documented rather than guarded.
pub trait DomainEvent: Send + Sync {
    /// Stable routing key, e.g. `"OrderCreated"`.
    fn name(&self) -> &'static str;

    /// Wire-shaped copy of the event's data.
    fn payload(&self) -> serde_json::Value;

    /// When the event was built (immediately before dispatch).
    fn occurred_at(&self) -> DateTime<Utc>;
}
