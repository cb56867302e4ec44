use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, InputObject, Object, Schema, SimpleObject};

use crate::metrics::Metrics;
use crate::usecase::{CreateOrderUseCase, ListOrdersUseCase, OrderInput, OrderOutput};

// ============================================================================
// Orders GraphQL Schema
// ============================================================================

pub type OrdersSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// GraphQL view of an order.
#[derive(SimpleObject)]
pub struct OrderType {
    pub id: String,
    pub price: f64,
    pub tax: f64,
    pub final_price: f64,
}

impl From<OrderOutput> for OrderType {
    fn from(output: OrderOutput) -> Self {
        Self {
            id: output.id,
            price: output.price,
            tax: output.tax,
            final_price: output.final_price,
        }
    }
}

#[derive(InputObject)]
pub struct CreateOrderInput {
    pub id: String,
    pub price: f64,
    pub tax: f64,
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn orders(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<OrderType>> {
        let list_orders = ctx.data::<Arc<ListOrdersUseCase>>()?;
        let metrics = ctx.data::<Arc<Metrics>>()?;

        let output = list_orders.get_orders().await?;
        metrics.orders_listed.with_label_values(&["graphql"]).inc();

        Ok(output.orders.into_iter().map(OrderType::from).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_order(
        &self,
        ctx: &Context<'_>,
        input: CreateOrderInput,
    ) -> async_graphql::Result<OrderType> {
        let create_order = ctx.data::<Arc<CreateOrderUseCase>>()?;
        let metrics = ctx.data::<Arc<Metrics>>()?;

        let output = create_order
            .execute(OrderInput {
                id: input.id,
                price: input.price,
                tax: input.tax,
            })
            .await?;
        metrics.orders_created.with_label_values(&["graphql"]).inc();

        Ok(OrderType::from(output))
    }
}

pub fn build_schema(
    create_order: Arc<CreateOrderUseCase>,
    list_orders: Arc<ListOrdersUseCase>,
    metrics: Arc<Metrics>,
) -> OrdersSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(create_order)
        .data(list_orders)
        .data(metrics)
        .finish()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::db::InMemoryOrderRepository;
    use crate::domain::order::OrderRepository;
    use crate::events::EventDispatcher;

    fn schema() -> OrdersSchema {
        let repository: Arc<dyn OrderRepository> = Arc::new(InMemoryOrderRepository::new());
        let dispatcher = Arc::new(EventDispatcher::new());

        build_schema(
            Arc::new(CreateOrderUseCase::new(repository.clone(), dispatcher)),
            Arc::new(ListOrdersUseCase::new(repository)),
            Arc::new(Metrics::new().unwrap()),
        )
    }

    #[tokio::test]
    async fn mutation_then_query_roundtrip() {
        let schema = schema();

        let resp = schema
            .execute(
                r#"mutation {
                    createOrder(input: { id: "order-1", price: 100.0, tax: 10.0 }) {
                        id
                        finalPrice
                    }
                }"#,
            )
            .await;
        assert!(resp.errors.is_empty(), "{:?}", resp.errors);

        let data = resp.data.into_json().unwrap();
        assert_eq!(data["createOrder"]["id"], "order-1");
        assert_eq!(data["createOrder"]["finalPrice"], 110.0);

        let resp = schema.execute("{ orders { id price tax finalPrice } }").await;
        assert!(resp.errors.is_empty(), "{:?}", resp.errors);

        let data = resp.data.into_json().unwrap();
        assert_eq!(data["orders"][0]["id"], "order-1");
        assert_eq!(data["orders"][0]["finalPrice"], 110.0);
    }

    #[tokio::test]
    async fn empty_id_surfaces_as_a_graphql_error() {
        let schema = schema();

        let resp = schema
            .execute(
                r#"mutation {
                    createOrder(input: { id: "", price: 1.0, tax: 1.0 }) { id }
                }"#,
            )
            .await;

        assert!(!resp.errors.is_empty());
    }
}
