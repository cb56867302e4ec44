use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use super::schema::OrdersSchema;

/// Start the GraphQL server: mutations/queries on /query, playground on /.
pub async fn start_graphql_server(schema: OrdersSchema, port: u16) -> std::io::Result<()> {
    tracing::info!("starting GraphQL server on http://0.0.0.0:{}/query", port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(schema.clone()))
            .route("/query", web::post().to(graphql_handler))
            .route("/", web::get().to(playground_handler))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

async fn graphql_handler(schema: web::Data<OrdersSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn playground_handler() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new("/query")))
}
