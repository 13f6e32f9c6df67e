//! RuleRegistry: name-based lookup of rule implementations.
//!
//! The registry is filled once during startup and only read afterwards. It is
//! handed to request handlers through the application state instead of living
//! in a global, so tests can build isolated registries.

use std::collections::{BTreeMap, BTreeSet};

use super::BoxedRule;

/// What happens when a name is registered a second time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The later registration replaces the earlier one (last-write-wins).
    #[default]
    Replace,
    /// The later registration is refused with [`RegistryError::DuplicateRule`].
    Reject,
}

/// Registration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("rule '{0}' is already registered")]
    DuplicateRule(String),
}

/// Registry mapping rule names to rule instances.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use rulecheck::rules::{MinItems, RuleRegistry};
///
/// let mut registry = RuleRegistry::new();
/// registry.register("min_items_2", Arc::new(MinItems::new(2)))?;
///
/// assert!(registry.get("min_items_2").is_some());
/// assert!(registry.get("min_items_3").is_none());
/// ```
#[derive(Default)]
pub struct RuleRegistry {
    rules: BTreeMap<String, BoxedRule>,
    policy: DuplicatePolicy,
}

impl RuleRegistry {
    /// Create a new empty registry with last-write-wins semantics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty registry with the given duplicate policy.
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            rules: BTreeMap::new(),
            policy,
        }
    }

    /// The duplicate policy this registry was built with.
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Register a rule under `name`.
    ///
    /// Under [`DuplicatePolicy::Replace`] this never fails and an existing entry
    /// is overwritten.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        rule: BoxedRule,
    ) -> Result<(), RegistryError> {
        let name = name.into();

        if self.rules.contains_key(&name) {
            match self.policy {
                DuplicatePolicy::Reject => return Err(RegistryError::DuplicateRule(name)),
                DuplicatePolicy::Replace => {
                    tracing::warn!(
                        rule = %name,
                        "Rule re-registered, replacing previous implementation"
                    );
                }
            }
        }

        tracing::debug!(rule = %name, description = %rule.describe(), "Registered rule");
        self.rules.insert(name, rule);
        Ok(())
    }

    /// Look up a rule by name. `None` means no rule is registered under it.
    pub fn get(&self, name: &str) -> Option<&BoxedRule> {
        self.rules.get(name)
    }

    /// Check if a rule is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// All registered rule names, sorted.
    pub fn list_names(&self) -> BTreeSet<&str> {
        self.rules.keys().map(String::as_str).collect()
    }

    /// Iterate over `(name, rule)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoxedRule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.list_names())
            .field("policy", &self.policy)
            .finish()
    }
}
