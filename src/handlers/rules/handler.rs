//! Rule check handler implementations

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::{error::AppResult, services::RuleService, state::AppState};

use super::{
    request::RuleCheckRequest,
    response::{RuleCheckResponse, RuleSummary, RulesListResponse},
};

/// Check rules against an order
pub async fn check_rules(
    State(state): State<AppState>,
    payload: Result<Json<RuleCheckRequest>, JsonRejection>,
) -> AppResult<Json<RuleCheckResponse>> {
    let Json(payload) = payload?;
    payload.validate()?;

    if state.config().rules.strict_names {
        RuleService::ensure_registered(state.registry(), payload.rule_names())?;
    }

    let report = RuleService::check_order(
        state.orders(),
        state.registry(),
        payload.order_id,
        payload.rule_names(),
    )
    .await?;

    Ok(Json(report.into()))
}

/// List registered rules
pub async fn list_rules(State(state): State<AppState>) -> Json<RulesListResponse> {
    let rules = state
        .registry()
        .iter()
        .map(|(name, rule)| RuleSummary {
            name: name.to_string(),
            description: rule.describe(),
        })
        .collect();

    Json(RulesListResponse { rules })
}
