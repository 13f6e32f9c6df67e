//! Example order fixtures

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    db::repositories::OrderRepository,
    error::AppResult,
    models::{NewOrder, Order},
};

/// The three example orders
///
/// - 150.00 / 3 items passes every built-in rule
/// - 75.50 / 1 item fails every built-in rule
/// - 95.00 / 2 items passes `min_items_2` and `divisible_by_5`
pub fn example_orders() -> [NewOrder; 3] {
    [
        NewOrder::new(Decimal::new(15000, 2), 3),
        NewOrder::new(Decimal::new(7550, 2), 1),
        NewOrder::new(Decimal::new(9500, 2), 2),
    ]
}

/// Replace all stored orders with the example set
pub async fn seed_orders(pool: &PgPool) -> AppResult<Vec<Order>> {
    let mut tx = pool.begin().await?;

    let removed = OrderRepository::delete_all(&mut tx).await?;
    tracing::info!(removed, "Cleared existing orders");

    let mut created = Vec::new();
    for order in example_orders() {
        created.push(OrderRepository::create(&mut tx, &order).await?);
    }

    tx.commit().await?;
    Ok(created)
}
