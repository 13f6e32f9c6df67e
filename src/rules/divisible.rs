//! Divisibility rule on the order total.
//!
//! The remainder is computed on the exact decimal value. Binary floating point
//! would misclassify totals such as `95.00` or sums of `0.1`.

use std::sync::Arc;

use rust_decimal::Decimal;

use super::{RegistryError, Rule, RuleError, RuleRegistry};
use crate::constants::rule_names;
use crate::models::Order;

/// Passes when `total mod divisor == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisibleBy {
    pub divisor: Decimal,
}

impl DivisibleBy {
    pub fn new(divisor: Decimal) -> Self {
        Self { divisor }
    }
}

impl Rule for DivisibleBy {
    fn check(&self, order: &Order) -> Result<bool, RuleError> {
        let remainder = order.total.checked_rem(self.divisor).ok_or_else(|| {
            RuleError::Arithmetic(format!("{} mod {} is undefined", order.total, self.divisor))
        })?;
        Ok(remainder.is_zero())
    }

    fn describe(&self) -> String {
        format!("Order total is divisible by {}", self.divisor)
    }
}

/// Registers `divisible_by_5`.
pub fn register(registry: &mut RuleRegistry) -> Result<(), RegistryError> {
    registry.register(
        rule_names::DIVISIBLE_BY_5,
        Arc::new(DivisibleBy::new(Decimal::from(5))),
    )
}
