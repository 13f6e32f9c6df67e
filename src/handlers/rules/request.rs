//! Rule check request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_RULES_PER_REQUEST;

/// Rule check request
///
/// Both fields are optional on the wire so that a missing or `null` value is
/// reported as an invalid request rather than a deserialization failure.
#[derive(Debug, Deserialize, Validate)]
pub struct RuleCheckRequest {
    #[serde(default)]
    pub order_id: Option<i64>,

    /// Rule names to evaluate, in order
    #[validate(length(max = MAX_RULES_PER_REQUEST))]
    #[serde(default)]
    pub rules: Option<Vec<String>>,
}

impl RuleCheckRequest {
    /// Requested rule names; absent and `null` both mean none
    pub fn rule_names(&self) -> &[String] {
        self.rules.as_deref().unwrap_or_default()
    }
}
