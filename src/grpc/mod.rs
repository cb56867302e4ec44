// ============================================================================
// gRPC Adapter
// ============================================================================
//
// proto/orders.proto is the authoritative IDL; pb.rs vendors the generated
// stubs so builds do not require protoc.
//
// ============================================================================

pub mod pb;
mod service;

pub use pb::order_service_server::OrderServiceServer;
pub use service::OrderGrpcService;
