//! Order model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Order database model
///
/// A read-only snapshot as far as the rule engine is concerned. `total` is an
/// exact decimal so that divisibility rules never see float representation error.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub total: Decimal,
    pub items_count: i32,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Build an order snapshot that has not come from the database
    pub fn new(id: i64, total: Decimal, items_count: i32) -> Self {
        Self {
            id,
            total,
            items_count,
            created_at: Utc::now(),
        }
    }
}

/// Values for an order that is about to be inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrder {
    pub total: Decimal,
    pub items_count: i32,
}

impl NewOrder {
    pub fn new(total: Decimal, items_count: i32) -> Self {
        Self { total, items_count }
    }
}
