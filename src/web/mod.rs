// ============================================================================
// REST Adapter
// ============================================================================

mod order_handler;
mod server;

pub use order_handler::AppState;
pub use server::start_web_server;
