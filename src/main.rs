//! RuleCheck - Application Entry Point
//!
//! This is the main entry point for the RuleCheck server.

use std::{net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;

use rulecheck::{
    config::CONFIG,
    create_router,
    db::{self, repositories::PgOrderLookup},
    rules,
    state::AppState,
    tracing_init::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(&CONFIG.server);

    tracing::info!("Starting RuleCheck server...");

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&CONFIG.database).await?;
    let latency = db::ping(&db_pool).await?;
    tracing::info!(latency_ms = latency.as_millis() as u64, "Order store reachable");

    // Run database migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&db_pool).await?;

    // Register rules before serving any request; read-only afterwards
    let registry = rules::builtin_registry(CONFIG.rules.duplicate_policy)?;
    tracing::info!(
        rules = ?registry.list_names(),
        policy = ?registry.policy(),
        strict_names = CONFIG.rules.strict_names,
        "Rule registry ready"
    );

    // Create application state
    let state = AppState::new(
        Arc::new(PgOrderLookup::new(db_pool)),
        Arc::new(registry),
        CONFIG.clone(),
    );

    let app = create_router(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
