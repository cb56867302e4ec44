use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::PgPool;
use sqlx::FromRow;

use crate::domain::order::{Order, OrderRepository};

// ============================================================================
// Postgres Order Repository
// ============================================================================

#[derive(FromRow)]
struct OrderRow {
    id: String,
    price: f64,
    tax: f64,
    final_price: f64,
}

/// Postgres-backed order store.
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Bootstrap the orders table. Safe to run on every startup.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS orders (
                id TEXT PRIMARY KEY,
                price DOUBLE PRECISION NOT NULL,
                tax DOUBLE PRECISION NOT NULL,
                final_price DOUBLE PRECISION NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create_order(&self, order: &Order) -> Result<()> {
        sqlx::query("INSERT INTO orders (id, price, tax, final_price) VALUES ($1, $2, $3, $4)")
            .bind(&order.id)
            .bind(order.price)
            .bind(order.tax)
            .bind(order.final_price)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn get_orders(&self) -> Result<Vec<Order>> {
        let rows: Vec<OrderRow> =
            sqlx::query_as("SELECT id, price, tax, final_price FROM orders ORDER BY created_at")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|row| Order {
                id: row.id,
                price: row.price,
                tax: row.tax,
                final_price: row.final_price,
            })
            .collect())
    }
}
