use anyhow::Result;
use async_trait::async_trait;

use super::event::DomainEvent;

// ============================================================================
// Event Handler Trait
// ============================================================================

/// Anything that can receive a dispatched event and react.
///
/// Handlers run in the dispatching task's context: an error here propagates
/// to whatever triggered the dispatch, and a slow handler stalls that
/// request. Registration is by shared reference; the dispatcher deduplicates
/// on the allocation address, so cloning a registered `Arc` yields the same
/// handler while two separately constructed handlers of one type do not.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: &dyn DomainEvent) -> Result<()>;
}
