//! End-to-end tests of the HTTP API against an in-memory order store.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use rulecheck::{
    config::{Config, DatabaseConfig, LogFormat, RulesConfig, ServerConfig},
    create_router,
    models::Order,
    rules::{DuplicatePolicy, builtin_registry},
    services::InMemoryOrderLookup,
    state::AppState,
};

fn test_config(strict_names: bool) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "info".to_string(),
            log_format: LogFormat::Pretty,
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            acquire_timeout_secs: 1,
        },
        rules: RulesConfig {
            duplicate_policy: DuplicatePolicy::Replace,
            strict_names,
        },
    }
}

fn test_app(strict_names: bool) -> Router {
    let orders = InMemoryOrderLookup::new([
        Order::new(1, Decimal::new(15000, 2), 3),
        Order::new(2, Decimal::new(7550, 2), 1),
        Order::new(3, Decimal::new(9500, 2), 2),
    ]);
    let registry = builtin_registry(DuplicatePolicy::Replace).unwrap();

    create_router(AppState::new(
        Arc::new(orders),
        Arc::new(registry),
        test_config(strict_names),
    ))
}

async fn post_check(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/check")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_check_all_pass() {
    let (status, body) = post_check(
        test_app(false),
        json!({ "order_id": 1, "rules": ["min_total_100", "min_items_2"] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "passed": true, "details": { "min_total_100": true, "min_items_2": true } })
    );
}

#[tokio::test]
async fn test_check_failing_rule() {
    let (status, body) =
        post_check(test_app(false), json!({ "order_id": 2, "rules": ["min_total_100"] })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "passed": false, "details": { "min_total_100": false } }));
}

#[tokio::test]
async fn test_check_unknown_rule_is_null() {
    let (status, body) =
        post_check(test_app(false), json!({ "order_id": 3, "rules": ["nonexistent_rule"] })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "passed": false, "details": { "nonexistent_rule": null } }));
}

#[tokio::test]
async fn test_check_preserves_rule_order() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/check")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "order_id": 3, "rules": ["divisible_by_5", "min_total_100", "min_items_2"] })
                .to_string(),
        ))
        .unwrap();

    let response = test_app(false).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();

    let expected = concat!(
        r#"{"passed":false,"details":"#,
        r#"{"divisible_by_5":true,"min_total_100":false,"min_items_2":true}}"#,
    );
    assert_eq!(text, expected);
}

#[tokio::test]
async fn test_check_order_not_found() {
    let (status, body) =
        post_check(test_app(false), json!({ "order_id": 999, "rules": ["min_items_2"] })).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "ORDER_NOT_FOUND");
    assert_eq!(body["error"]["details"]["order_id"], 999);
}

#[tokio::test]
async fn test_check_empty_rules_is_invalid() {
    let (status, body) = post_check(test_app(false), json!({ "order_id": 1, "rules": [] })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn test_check_missing_fields_are_invalid() {
    let (status, body) = post_check(test_app(false), json!({ "rules": ["min_items_2"] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_REQUEST");

    let (status, body) = post_check(test_app(false), json!({ "order_id": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn test_check_null_rules_is_invalid() {
    let (status, body) =
        post_check(test_app(false), json!({ "order_id": 1, "rules": null })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_REQUEST");
    assert_eq!(body["error"]["message"], "Invalid request: rules list is required");
}

#[tokio::test]
async fn test_check_malformed_body_uses_error_envelope() {
    let (status, body) = post_check(test_app(false), json!({ "order_id": 1, "rules": [1] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_REQUEST");

    let (status, body) =
        post_check(test_app(false), json!({ "order_id": "abc", "rules": ["min_items_2"] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_REQUEST");

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/check")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(test_app(false), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn test_check_too_many_rules_is_rejected() {
    let rules: Vec<&str> = std::iter::repeat_n("min_items_2", 65).collect();
    let (status, body) =
        post_check(test_app(false), json!({ "order_id": 1, "rules": rules })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_strict_names_rejects_unknown_rules() {
    let (status, body) = post_check(
        test_app(true),
        json!({ "order_id": 1, "rules": ["min_items_2", "nonexistent_rule"] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "UNKNOWN_RULES");
    assert_eq!(body["error"]["details"]["unknown_rules"], json!(["nonexistent_rule"]));
}

#[tokio::test]
async fn test_strict_names_allows_registered_rules() {
    let (status, body) =
        post_check(test_app(true), json!({ "order_id": 1, "rules": ["divisible_by_5"] })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "passed": true, "details": { "divisible_by_5": true } }));
}

#[tokio::test]
async fn test_list_rules() {
    let request = Request::builder()
        .uri("/api/v1/rules")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(test_app(false), request).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["rules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["divisible_by_5", "min_items_2", "min_total_100"]);
    assert_eq!(body["rules"][2]["description"], "Order total is greater than 100");
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/api/v1/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(test_app(false), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["rules_loaded"], 3);
}
