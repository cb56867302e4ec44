use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use prometheus::{Encoder, TextEncoder};

use super::order_handler::{self, AppState};

/// Start the REST server. Runs until the process exits.
///
/// Also exposes the health probe and the Prometheus scrape endpoint.
pub async fn start_web_server(state: AppState, port: u16) -> std::io::Result<()> {
    tracing::info!("starting web server on http://0.0.0.0:{}/orders", port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .route("/orders", web::post().to(order_handler::create))
            .route("/orders", web::get().to(order_handler::get_orders))
            .route("/health", web::get().to(health_handler))
            .route("/metrics", web::get().to(metrics_handler))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

async fn metrics_handler(state: web::Data<AppState>) -> impl Responder {
    let encoder = TextEncoder::new();
    let metric_families = state.metrics.registry().gather();

    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(e.to_string());
    }

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(buffer)
}

async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "orders-service"
    }))
}
