//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod order_repo;

pub use order_repo::{OrderRepository, PgOrderLookup};
