//! Order repository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::{
    error::AppResult,
    models::{NewOrder, Order},
    services::OrderLookup,
};

/// Repository for order database operations
pub struct OrderRepository;

impl OrderRepository {
    /// Insert a new order inside an open transaction
    pub async fn create(tx: &mut Transaction<'_, Postgres>, order: &NewOrder) -> AppResult<Order> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (total, items_count)
            VALUES ($1, $2)
            RETURNING id, total, items_count, created_at
            "#,
        )
        .bind(order.total)
        .bind(order.items_count)
        .fetch_one(&mut **tx)
        .await?;

        Ok(order)
    }

    /// Find order by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            r#"SELECT id, total, items_count, created_at FROM orders WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(order)
    }

    /// List all orders by id
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            r#"SELECT id, total, items_count, created_at FROM orders ORDER BY id"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(orders)
    }

    /// Delete every order, returning how many were removed
    pub async fn delete_all(tx: &mut Transaction<'_, Postgres>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM orders").execute(&mut **tx).await?;
        Ok(result.rows_affected())
    }
}

/// [`OrderLookup`] backed by the `orders` table
#[derive(Debug, Clone)]
pub struct PgOrderLookup {
    pool: PgPool,
}

impl PgOrderLookup {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderLookup for PgOrderLookup {
    async fn get_by_id(&self, id: i64) -> AppResult<Option<Order>> {
        OrderRepository::find_by_id(&self.pool, id).await
    }
}
