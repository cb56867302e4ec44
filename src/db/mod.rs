// ============================================================================
// Persistence Adapters
// ============================================================================

mod memory;
mod order_repository;

pub use memory::InMemoryOrderRepository;
pub use order_repository::PgOrderRepository;
