//! Rule evaluation service

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::{EvaluationReport, Order, RuleOutcome},
    rules::RuleRegistry,
    services::OrderLookup,
};

/// Rule service for business logic
pub struct RuleService;

impl RuleService {
    /// Fetch an order and check the requested rules against it
    ///
    /// Caller errors (missing order id, empty rule list) and a missing order are
    /// reported before any rule runs.
    pub async fn check_order(
        orders: &dyn OrderLookup,
        registry: &RuleRegistry,
        order_id: Option<i64>,
        rule_names: &[String],
    ) -> AppResult<EvaluationReport> {
        // An id of 0 never identifies an order and is treated as missing
        let order_id = order_id
            .filter(|id| *id != 0)
            .ok_or_else(|| AppError::InvalidRequest("order_id is required".to_string()))?;
        Self::ensure_rules_present(rule_names)?;

        let order = orders
            .get_by_id(order_id)
            .await?
            .ok_or(AppError::OrderNotFound(order_id))?;

        Self::evaluate(registry, &order, rule_names)
    }

    /// Check the requested rules against an already loaded order
    ///
    /// Unregistered names are recorded as [`RuleOutcome::Unknown`] and make the
    /// report fail. A rule that returns an error aborts the whole evaluation.
    pub fn evaluate(
        registry: &RuleRegistry,
        order: &Order,
        rule_names: &[String],
    ) -> AppResult<EvaluationReport> {
        Self::ensure_rules_present(rule_names)?;

        let mut details = IndexMap::with_capacity(rule_names.len());

        for name in rule_names {
            let outcome = match registry.get(name) {
                Some(rule) => {
                    let passed = rule.check(order).map_err(|source| AppError::RuleFault {
                        rule: name.clone(),
                        source,
                    })?;
                    RuleOutcome::from(passed)
                }
                None => {
                    tracing::warn!(order_id = order.id, rule = %name, "Unknown rule requested");
                    RuleOutcome::Unknown
                }
            };

            tracing::debug!(
                order_id = order.id,
                rule = %name,
                outcome = ?outcome,
                "Rule evaluated"
            );
            details.insert(name.clone(), outcome);
        }

        let report = EvaluationReport::new(order.id, details);

        tracing::info!(
            order_id = order.id,
            rules = report.details.len(),
            passed = report.passed,
            "Rule check completed"
        );

        Ok(report)
    }

    /// Reject rule names that have no registered implementation
    pub fn ensure_registered(registry: &RuleRegistry, rule_names: &[String]) -> AppResult<()> {
        let known = registry.list_names();
        let mut unknown: Vec<String> = Vec::new();

        for name in rule_names {
            if !known.contains(name.as_str()) && !unknown.contains(name) {
                unknown.push(name.clone());
            }
        }

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(AppError::UnknownRules(unknown))
        }
    }

    fn ensure_rules_present(rule_names: &[String]) -> AppResult<()> {
        if rule_names.is_empty() {
            return Err(AppError::InvalidRequest("rules list is required".to_string()));
        }
        Ok(())
    }
}
