//! Business rules checked against orders.
//!
//! A rule is a named, stateless predicate over an [`Order`]. Rules are looked up
//! by name through a [`RuleRegistry`], so the evaluator never needs to know a
//! rule's concrete type.
//!
//! Every built-in rule module exposes its own `register` function.
//! [`register_builtin_rules`] is the single startup routine that calls them all;
//! adding a rule means adding a module and one line there.
//!
//! # Example
//!
//! ```ignore
//! use rulecheck::rules::{builtin_registry, DuplicatePolicy};
//!
//! let registry = builtin_registry(DuplicatePolicy::Replace)?;
//! let rule = registry.get("min_total_100").expect("built-in");
//! assert!(rule.check(&order)?);
//! ```

pub mod divisible;
pub mod min_items;
pub mod min_total;
pub mod registry;

use std::sync::Arc;

use crate::models::Order;

pub use divisible::DivisibleBy;
pub use min_items::MinItems;
pub use min_total::MinTotal;
pub use registry::{DuplicatePolicy, RegistryError, RuleRegistry};

/// A named predicate over an order.
///
/// Implementations must be pure: the same order always yields the same result,
/// and nothing is mutated. `Err` is reserved for faults in the rule itself and is
/// never a business "no".
pub trait Rule: Send + Sync {
    /// Check whether the order satisfies this rule.
    fn check(&self, order: &Order) -> Result<bool, RuleError>;

    /// Human-readable description of what the rule checks.
    fn describe(&self) -> String;
}

/// A shared rule for dynamic dispatch.
pub type BoxedRule = Arc<dyn Rule>;

/// A rule could not produce a verdict for a well-formed order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("arithmetic error: {0}")]
    Arithmetic(String),
}

/// Register every built-in rule.
pub fn register_builtin_rules(registry: &mut RuleRegistry) -> Result<(), RegistryError> {
    min_total::register(registry)?;
    min_items::register(registry)?;
    divisible::register(registry)?;
    Ok(())
}

/// Create a registry pre-loaded with the built-in rules.
pub fn builtin_registry(policy: DuplicatePolicy) -> Result<RuleRegistry, RegistryError> {
    let mut registry = RuleRegistry::with_policy(policy);
    register_builtin_rules(&mut registry)?;
    Ok(registry)
}
