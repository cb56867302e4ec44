// ============================================================================
// GraphQL Adapter
// ============================================================================

mod schema;
mod server;

pub use schema::{build_schema, MutationRoot, OrdersSchema, QueryRoot};
pub use server::start_graphql_server;
