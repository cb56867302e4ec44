use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::event::DomainEvent;
use super::handler::EventHandler;

// ============================================================================
// Event Dispatcher
// ============================================================================

/// Shared reference to a registered handler.
pub type HandlerRef = Arc<dyn EventHandler>;

#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("handler already registered for event \"{0}\"")]
    HandlerAlreadyRegistered(String),

    #[error("handler failed while processing \"{event}\"")]
    HandlerFailed {
        event: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Registry mapping event names to ordered handler lists.
///
/// Constructed once at process start and shared by reference into every use
/// case that raises events. Registration normally happens single-threaded
/// during startup, but the registry is guarded so that late `register` /
/// `remove` calls stay safe against concurrent dispatch.
///
/// Delivery is at-most-once and synchronous: handlers run sequentially in
/// the dispatching task, in registration order, and the first failure aborts
/// the chain and surfaces to the caller.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: RwLock<HashMap<String, Vec<HandlerRef>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handler` to the list for `event_name`.
    ///
    /// Registering the identical handler (same allocation) twice under one
    /// name is rejected to avoid double delivery.
    pub async fn register(&self, event_name: &str, handler: HandlerRef) -> Result<(), EventError> {
        let mut handlers = self.handlers.write().await;
        let entry = handlers.entry(event_name.to_string()).or_default();

        if entry.iter().any(|h| same_handler(h, &handler)) {
            return Err(EventError::HandlerAlreadyRegistered(event_name.to_string()));
        }

        entry.push(handler);
        Ok(())
    }

    /// Remove a previously registered handler.
    ///
    /// Silent no-op when the handler was never registered, so teardown can
    /// be idempotent.
    pub async fn remove(&self, event_name: &str, handler: &HandlerRef) {
        let mut handlers = self.handlers.write().await;
        if let Some(entry) = handlers.get_mut(event_name) {
            entry.retain(|h| !same_handler(h, handler));
            if entry.is_empty() {
                handlers.remove(event_name);
            }
        }
    }

    /// Identity membership query.
    pub async fn has(&self, event_name: &str, handler: &HandlerRef) -> bool {
        self.handlers
            .read()
            .await
            .get(event_name)
            .is_some_and(|entry| entry.iter().any(|h| same_handler(h, handler)))
    }

    /// Drop every registration (process shutdown / test reset).
    pub async fn clear(&self) {
        self.handlers.write().await.clear();
    }

    /// Invoke each handler registered under `event.name()`, in registration
    /// order, sequentially in the caller's task.
    ///
    /// No registered handlers is a silent no-op. A handler error aborts the
    /// chain: handlers later in the list are not invoked, and the failure
    /// propagates to whatever triggered the dispatch.
    pub async fn dispatch(&self, event: &dyn DomainEvent) -> Result<(), EventError> {
        // Snapshot under the read lock so a slow handler never blocks
        // register/remove on other tasks.
        let snapshot: Vec<HandlerRef> = {
            let handlers = self.handlers.read().await;
            match handlers.get(event.name()) {
                Some(entry) => entry.clone(),
                None => return Ok(()),
            }
        };

        for handler in snapshot {
            handler
                .handle(event)
                .await
                .map_err(|source| EventError::HandlerFailed {
                    event: event.name().to_string(),
                    source,
                })?;
        }

        tracing::debug!(event = %event.name(), "event dispatched");
        Ok(())
    }
}

// Identity is the allocation address of the registered Arc; the vtable half
// of the fat pointer is ignored so the comparison is stable across coercions.
fn same_handler(a: &HandlerRef, b: &HandlerRef) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}

// ============================================================================
// Unit Tests
// ============================================================================
