//! Rule evaluation report

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Outcome of a single requested rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    Passed,
    Failed,
    /// No rule is registered under the requested name
    Unknown,
}

impl RuleOutcome {
    /// Wire representation: `true`, `false` or `null`
    pub fn as_option(self) -> Option<bool> {
        match self {
            Self::Passed => Some(true),
            Self::Failed => Some(false),
            Self::Unknown => None,
        }
    }

    pub fn is_passed(self) -> bool {
        self == Self::Passed
    }
}

impl From<bool> for RuleOutcome {
    fn from(passed: bool) -> Self {
        if passed { Self::Passed } else { Self::Failed }
    }
}

impl Serialize for RuleOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_option().serialize(serializer)
    }
}

/// Per-request result of checking rules against one order
///
/// `details` keeps the order in which rule names were first requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationReport {
    pub order_id: i64,
    pub passed: bool,
    pub details: IndexMap<String, RuleOutcome>,
}

impl EvaluationReport {
    /// Build a report; `passed` holds only when every outcome passed
    pub fn new(order_id: i64, details: IndexMap<String, RuleOutcome>) -> Self {
        let passed = !details.is_empty() && details.values().all(|o| o.is_passed());
        Self {
            order_id,
            passed,
            details,
        }
    }

    /// Names that had no registered rule
    pub fn unknown_rules(&self) -> impl Iterator<Item = &str> {
        self.details
            .iter()
            .filter(|(_, outcome)| **outcome == RuleOutcome::Unknown)
            .map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_serializes_as_nullable_bool() {
        let json = serde_json::to_value([
            RuleOutcome::Passed,
            RuleOutcome::Failed,
            RuleOutcome::Unknown,
        ])
        .unwrap();
        assert_eq!(json, serde_json::json!([true, false, null]));
    }

    #[test]
    fn test_unknown_outcome_fails_report() {
        let mut details = IndexMap::new();
        details.insert("min_items_2".to_string(), RuleOutcome::Passed);
        details.insert("nonexistent_rule".to_string(), RuleOutcome::Unknown);

        let report = EvaluationReport::new(1, details);
        assert!(!report.passed);
        assert_eq!(report.unknown_rules().collect::<Vec<_>>(), vec!["nonexistent_rule"]);
    }

    #[test]
    fn test_details_keep_request_order() {
        let mut details = IndexMap::new();
        details.insert("min_total_100".to_string(), RuleOutcome::Passed);
        details.insert("divisible_by_5".to_string(), RuleOutcome::Passed);
        details.insert("min_items_2".to_string(), RuleOutcome::Passed);

        let report = EvaluationReport::new(3, details);
        assert!(report.passed);
        let json = serde_json::to_string(&report.details).unwrap();
        assert_eq!(
            json,
            r#"{"min_total_100":true,"divisible_by_5":true,"min_items_2":true}"#
        );
    }
}
