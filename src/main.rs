use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod domain;
mod events;
mod graphql;
mod grpc;
mod messaging;
mod metrics;
mod usecase;
mod web;

use config::Config;
use db::PgOrderRepository;
use domain::order::{OrderRepository, ORDER_CREATED};
use events::EventDispatcher;
use grpc::{OrderGrpcService, OrderServiceServer};
use messaging::{KafkaClient, OrderCreatedHandler};
use metrics::Metrics;
use usecase::{CreateOrderUseCase, ListOrdersUseCase};
use web::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,orders_service=debug")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        web_port = config.web_port,
        grpc_port = config.grpc_port,
        graphql_port = config.graphql_port,
        topic = %config.orders_topic,
        "configuration loaded"
    );

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("failed to connect to postgres")?;

    let pg_repository = PgOrderRepository::new(pool);
    pg_repository.migrate().await?;
    let repository: Arc<dyn OrderRepository> = Arc::new(pg_repository);

    let metrics = Arc::new(Metrics::new()?);
    let kafka = Arc::new(KafkaClient::new(&config.kafka_brokers)?);

    // The broker handler must be registered before any transport can accept
    // a create request.
    let dispatcher = Arc::new(EventDispatcher::new());
    dispatcher
        .register(
            ORDER_CREATED,
            Arc::new(OrderCreatedHandler::new(
                kafka,
                &config.orders_topic,
                metrics.clone(),
            )),
        )
        .await?;

    let create_order = Arc::new(CreateOrderUseCase::new(repository.clone(), dispatcher));
    let list_orders = Arc::new(ListOrdersUseCase::new(repository));

    start_web_thread(
        AppState {
            create_order: create_order.clone(),
            list_orders: list_orders.clone(),
            metrics: metrics.clone(),
        },
        config.web_port,
    );

    start_graphql_thread(
        graphql::build_schema(create_order.clone(), list_orders.clone(), metrics.clone()),
        config.graphql_port,
    );

    let addr = format!("0.0.0.0:{}", config.grpc_port)
        .parse()
        .context("invalid gRPC listen address")?;
    tracing::info!("starting gRPC server on {}", addr);

    tonic::transport::Server::builder()
        .add_service(OrderServiceServer::new(OrderGrpcService::new(
            create_order,
            list_orders,
            metrics,
        )))
        .serve(addr)
        .await?;

    Ok(())
}

// actix-web wants its own runtime, so each HTTP front end gets a dedicated
// thread with a fresh tokio runtime instead of sharing the gRPC one.
fn start_web_thread(state: AppState, port: u16) {
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!(error = %e, "failed to build web server runtime");
                return;
            }
        };
        rt.block_on(async move {
            if let Err(e) = web::start_web_server(state, port).await {
                tracing::error!(error = %e, "web server exited");
            }
        });
    });
}

fn start_graphql_thread(schema: graphql::OrdersSchema, port: u16) {
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!(error = %e, "failed to build GraphQL server runtime");
                return;
            }
        };
        rt.block_on(async move {
            if let Err(e) = graphql::start_graphql_server(schema, port).await {
                tracing::error!(error = %e, "GraphQL server exited");
            }
        });
    });
}
