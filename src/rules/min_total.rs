//! Minimum order total rule.

use std::sync::Arc;

use rust_decimal::Decimal;

use super::{RegistryError, Rule, RuleError, RuleRegistry};
use crate::constants::rule_names;
use crate::models::Order;

/// Passes when the order total is strictly greater than `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinTotal {
    pub threshold: Decimal,
}

impl MinTotal {
    pub fn new(threshold: Decimal) -> Self {
        Self { threshold }
    }
}

impl Rule for MinTotal {
    fn check(&self, order: &Order) -> Result<bool, RuleError> {
        Ok(order.total > self.threshold)
    }

    fn describe(&self) -> String {
        format!("Order total is greater than {}", self.threshold)
    }
}

/// Registers `min_total_100`.
pub fn register(registry: &mut RuleRegistry) -> Result<(), RegistryError> {
    registry.register(
        rule_names::MIN_TOTAL_100,
        Arc::new(MinTotal::new(Decimal::from(100))),
    )
}
