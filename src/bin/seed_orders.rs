//! Seed the database with the three example orders.

use rulecheck::{config::CONFIG, db, tracing_init::init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(&CONFIG.server);

    let pool = db::create_pool(&CONFIG.database).await?;
    db::run_migrations(&pool).await?;

    let orders = db::seed::seed_orders(&pool).await?;

    tracing::info!("Successfully created {} orders", orders.len());
    for order in db::repositories::OrderRepository::list(&pool).await? {
        tracing::info!(
            "  - Order {}: ${}, {} items",
            order.id,
            order.total,
            order.items_count
        );
    }

    Ok(())
}
