//! Minimum item count rule.

use std::sync::Arc;

use super::{RegistryError, Rule, RuleError, RuleRegistry};
use crate::constants::rule_names;
use crate::models::Order;

/// Passes when the order holds at least `minimum` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinItems {
    pub minimum: i32,
}

impl MinItems {
    pub fn new(minimum: i32) -> Self {
        Self { minimum }
    }
}

impl Rule for MinItems {
    fn check(&self, order: &Order) -> Result<bool, RuleError> {
        Ok(order.items_count >= self.minimum)
    }

    fn describe(&self) -> String {
        format!("Order has at least {} items", self.minimum)
    }
}

/// Registers `min_items_2`.
pub fn register(registry: &mut RuleRegistry) -> Result<(), RegistryError> {
    registry.register(rule_names::MIN_ITEMS_2, Arc::new(MinItems::new(2)))
}
