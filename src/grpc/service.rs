use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::metrics::Metrics;
use crate::usecase::{CreateOrderUseCase, ListOrdersUseCase, OrderInput};

use super::pb::order_service_server::OrderService;
use super::pb::{CreateOrderRequest, CreateOrderResponse, ListOrdersRequest, ListOrdersResponse};

// ============================================================================
// Order gRPC Service
// ============================================================================

/// gRPC front end over the shared use cases.
///
/// The wire carries 32-bit floats; widening happens on the way in, narrowing
/// on the way out.
pub struct OrderGrpcService {
    create_order: Arc<CreateOrderUseCase>,
    list_orders: Arc<ListOrdersUseCase>,
    metrics: Arc<Metrics>,
}

impl OrderGrpcService {
    pub fn new(
        create_order: Arc<CreateOrderUseCase>,
        list_orders: Arc<ListOrdersUseCase>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            create_order,
            list_orders,
            metrics,
        }
    }
}

#[tonic::async_trait]
impl OrderService for OrderGrpcService {
    async fn create_order(
        &self,
        request: Request<CreateOrderRequest>,
    ) -> Result<Response<CreateOrderResponse>, Status> {
        let req = request.into_inner();
        let input = OrderInput {
            id: req.id,
            price: f64::from(req.price),
            tax: f64::from(req.tax),
        };

        let output = self
            .create_order
            .execute(input)
            .await
            .map_err(|e| Status::internal(e.to_string()))?;

        self.metrics.orders_created.with_label_values(&["grpc"]).inc();
        Ok(Response::new(CreateOrderResponse {
            id: output.id,
            price: output.price as f32,
            tax: output.tax as f32,
            final_price: output.final_price as f32,
        }))
    }

    async fn list_orders(
        &self,
        _request: Request<ListOrdersRequest>,
    ) -> Result<Response<ListOrdersResponse>, Status> {
        let output = self
            .list_orders
            .get_orders()
            .await
            .map_err(|e| Status::internal(e.to_string()))?;

        self.metrics.orders_listed.with_label_values(&["grpc"]).inc();
        Ok(Response::new(ListOrdersResponse {
            orders: output
                .orders
                .into_iter()
                .map(|o| super::pb::Order {
                    id: o.id,
                    price: o.price as f32,
                    tax: o.tax as f32,
                    final_price: o.final_price as f32,
                })
                .collect(),
        }))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
