// ============================================================================
// Order Domain - Entity, Events, Errors, Repository Contract
// ============================================================================
//
// Everything order-specific lives here:
// - Entity (Order with the derived final price)
// - Events (OrderCreated, raised once per successful creation)
// - Errors (OrderError enum)
// - Repository trait (the persistence capability the use cases consume)
//
// This is completely separate from the generic event dispatch infrastructure
// in `crate::events`.
//
// ============================================================================

pub mod entity;
pub mod errors;
pub mod events;
pub mod repository;

// Re-export for convenience
pub use entity::*;
pub use errors::*;
pub use events::*;
pub use repository::*;
