//! Order lookup collaborator
//!
//! The rule evaluator only needs to fetch an order snapshot by id. The Postgres
//! implementation lives in `db::repositories::order_repo`.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::{error::AppResult, models::Order};

/// Fetch orders by id
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderLookup: Send + Sync {
    /// `Ok(None)` when no order has this id
    async fn get_by_id(&self, id: i64) -> AppResult<Option<Order>>;
}

/// Fixed set of orders held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderLookup {
    orders: HashMap<i64, Order>,
}

impl InMemoryOrderLookup {
    pub fn new(orders: impl IntoIterator<Item = Order>) -> Self {
        Self {
            orders: orders.into_iter().map(|o| (o.id, o)).collect(),
        }
    }
}

#[async_trait]
impl OrderLookup for InMemoryOrderLookup {
    async fn get_by_id(&self, id: i64) -> AppResult<Option<Order>> {
        Ok(self.orders.get(&id).cloned())
    }
}
