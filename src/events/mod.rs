// ============================================================================
// Event Dispatch - In-Process Observer Registry
// ============================================================================
//
// The decoupling layer between the use cases (producers) and however many
// side-effect handlers exist (consumers). The dispatcher is not a durable
// message bus: delivery is at-most-once, synchronous, and in-process, with
// no retry and no backpressure. Its only job is to let a use case raise an
// event without importing whoever listens to it.
//
// ============================================================================

pub mod dispatcher;
pub mod event;
pub mod handler;

pub use dispatcher::{EventDispatcher, EventError, HandlerRef};
pub use event::DomainEvent;
pub use handler::EventHandler;
