//! Rule check response DTOs

use indexmap::IndexMap;
use serde::Serialize;

use crate::models::{EvaluationReport, RuleOutcome};

/// Rule check response
#[derive(Debug, Serialize)]
pub struct RuleCheckResponse {
    pub passed: bool,
    /// `true`/`false` per rule, `null` for names with no registered rule
    pub details: IndexMap<String, RuleOutcome>,
}

impl From<EvaluationReport> for RuleCheckResponse {
    fn from(report: EvaluationReport) -> Self {
        Self {
            passed: report.passed,
            details: report.details,
        }
    }
}

/// Registered rule summary
#[derive(Debug, Serialize)]
pub struct RuleSummary {
    pub name: String,
    pub description: String,
}

/// Rule list response
#[derive(Debug, Serialize)]
pub struct RulesListResponse {
    pub rules: Vec<RuleSummary>,
}
