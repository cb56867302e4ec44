use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};

use crate::metrics::Metrics;
use crate::usecase::{CreateOrderUseCase, ListOrdersUseCase, OrderInput};

// ============================================================================
// Order HTTP Handlers
// ============================================================================

/// Shared state for the REST routes.
#[derive(Clone)]
pub struct AppState {
    pub create_order: Arc<CreateOrderUseCase>,
    pub list_orders: Arc<ListOrdersUseCase>,
    pub metrics: Arc<Metrics>,
}

/// POST /orders
///
/// Malformed JSON is rejected with 400 by the extractor before this handler
/// runs; any use-case error maps to 500 with the error text.
pub async fn create(state: web::Data<AppState>, input: web::Json<OrderInput>) -> impl Responder {
    match state.create_order.execute(input.into_inner()).await {
        Ok(output) => {
            state.metrics.orders_created.with_label_values(&["http"]).inc();
            HttpResponse::Ok().json(output)
        }
        Err(e) => {
            tracing::error!(error = %e, "order creation failed");
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

/// GET /orders
pub async fn get_orders(state: web::Data<AppState>) -> impl Responder {
    match state.list_orders.get_orders().await {
        Ok(output) => {
            state.metrics.orders_listed.with_label_values(&["http"]).inc();
            HttpResponse::Ok().json(output)
        }
        Err(e) => {
            tracing::error!(error = %e, "order listing failed");
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    use crate::db::InMemoryOrderRepository;
    use crate::domain::order::OrderRepository;
    use crate::events::EventDispatcher;
    use crate::usecase::{OrderOutput, OrdersOutput};

    fn test_state() -> AppState {
        let repository: Arc<dyn OrderRepository> = Arc::new(InMemoryOrderRepository::new());
        let dispatcher = Arc::new(EventDispatcher::new());

        AppState {
            create_order: Arc::new(CreateOrderUseCase::new(repository.clone(), dispatcher)),
            list_orders: Arc::new(ListOrdersUseCase::new(repository)),
            metrics: Arc::new(Metrics::new().unwrap()),
        }
    }

    #[actix_web::test]
    async fn create_then_list_roundtrip() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .route("/orders", web::post().to(create))
                .route("/orders", web::get().to(get_orders)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/orders")
            .set_json(serde_json::json!({"id": "order-1", "price": 100.0, "tax": 10.0}))
            .to_request();
        let created: OrderOutput = test::call_and_read_body_json(&app, req).await;

        assert_eq!(created.id, "order-1");
        assert_eq!(created.final_price, 110.0);

        let req = test::TestRequest::get().uri("/orders").to_request();
        let listed: OrdersOutput = test::call_and_read_body_json(&app, req).await;

        assert_eq!(listed.orders.len(), 1);
        assert_eq!(listed.orders[0].final_price, 110.0);
    }

    #[actix_web::test]
    async fn malformed_body_is_a_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .route("/orders", web::post().to(create)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/orders")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn use_case_error_is_an_internal_error() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .route("/orders", web::post().to(create)),
        )
        .await;

        // Empty id fails entity construction inside the use case.
        let req = test::TestRequest::post()
            .uri("/orders")
            .set_json(serde_json::json!({"id": "", "price": 1.0, "tax": 1.0}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
