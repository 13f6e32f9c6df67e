//! Database module
//!
//! This module handles database connections, migrations, repositories and seeding.

pub mod connection;
pub mod repositories;
pub mod seed;

use sqlx::PgPool;

pub use connection::*;

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
