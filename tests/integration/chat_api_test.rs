//! Chat API integration tests
//!
//! Drives the composed router over HTTP semantics: JSON decoding at the
//! boundary, the facade behind it, and the error envelope.

mod common;

use std::sync::Arc;

use axum::http::{Method, Request, StatusCode};
use chrono::{DateTime, Utc};
use serde_json::json;
use tower::ServiceExt;

use cookbot_llm::LlmConfig;

use crate::common::{
    body_text, get, mock_config, parse_body, post_json, post_raw, FailingLlmService,
    ScriptedLlmService, TestApp,
};

#[test_log::test(tokio::test)]
async fn test_send_message_returns_generated_reply() {
    let (app, model) = TestApp::scripted();
    model.add_response("닭가슴살 볶음밥 레시피를 추천드립니다.");

    let req = post_json(
        "/api/chat/send",
        &json!({"message": "단백질 60g을 채울 수 있는 레시피 알려줘", "userId": "user123"}),
    );

    let resp = app.router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = parse_body(resp).await;
    assert_eq!(body["message"], "닭가슴살 볶음밥 레시피를 추천드립니다.");
    assert_eq!(
        model.received_messages(),
        vec!["단백질 60g을 채울 수 있는 레시피 알려줘".to_string()]
    );
}

#[test_log::test(tokio::test)]
async fn test_send_message_response_has_message_and_timestamp() {
    let (app, _model) = TestApp::scripted();

    let req = post_json(
        "/api/chat/send",
        &json!({"message": "레시피 추천해줘", "userId": "user123"}),
    );

    let resp = app.router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = parse_body(resp).await;
    assert_eq!(body["message"], ScriptedLlmService::DEFAULT_REPLY);
    assert!(body["timestamp"].is_string());
}

#[test_log::test(tokio::test)]
async fn test_send_message_timestamp_is_current_rfc3339() {
    let (app, _model) = TestApp::scripted();

    let before = Utc::now();
    let resp = app
        .router()
        .oneshot(post_json(
            "/api/chat/send",
            &json!({"message": "안녕", "userId": "user123"}),
        ))
        .await
        .unwrap();
    let after = Utc::now();

    let body = parse_body(resp).await;
    let timestamp = DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap())
        .unwrap()
        .with_timezone(&Utc);

    assert!(timestamp >= before);
    assert!(timestamp <= after);
}

#[test_log::test(tokio::test)]
async fn test_send_message_replays_replies_in_order() {
    let (app, model) = TestApp::scripted();
    model.add_response("첫 번째 레시피");
    model.add_response("두 번째 레시피");

    let first = app
        .router()
        .oneshot(post_json(
            "/api/chat/send",
            &json!({"message": "첫 번째 요청", "userId": "user123"}),
        ))
        .await
        .unwrap();
    let second = app
        .router()
        .oneshot(post_json(
            "/api/chat/send",
            &json!({"message": "두 번째 요청", "userId": "user123"}),
        ))
        .await
        .unwrap();

    assert_eq!(parse_body(first).await["message"], "첫 번째 레시피");
    assert_eq!(parse_body(second).await["message"], "두 번째 레시피");
    assert_eq!(
        model.received_messages(),
        vec!["첫 번째 요청".to_string(), "두 번째 요청".to_string()]
    );
}

#[test_log::test(tokio::test)]
async fn test_send_message_empty_reply_is_valid() {
    let (app, model) = TestApp::scripted();
    model.add_response("");

    let resp = app
        .router()
        .oneshot(post_json(
            "/api/chat/send",
            &json!({"message": "안녕", "userId": "user123"}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(parse_body(resp).await["message"], "");
}

#[test_log::test(tokio::test)]
async fn test_send_message_snake_case_user_id_returns_400() {
    let (app, _model) = TestApp::scripted();

    let req = post_json(
        "/api/chat/send",
        &json!({"message": "안녕", "user_id": "user123"}),
    );

    let resp = app.router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = parse_body(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[test_log::test(tokio::test)]
async fn test_send_message_missing_message_returns_400() {
    let (app, _model) = TestApp::scripted();

    let req = post_json("/api/chat/send", &json!({"userId": "user123"}));

    let resp = app.router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn test_send_message_malformed_body_returns_400() {
    let (app, _model) = TestApp::scripted();

    let req = post_raw("/api/chat/send", "not json at all");

    let resp = app.router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = parse_body(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[test_log::test(tokio::test)]
async fn test_send_message_model_failure_returns_500() {
    let app = TestApp::with_model(Arc::new(FailingLlmService));

    let req = post_json(
        "/api/chat/send",
        &json!({"message": "아무 메시지", "userId": "user456"}),
    );

    let resp = app.router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = parse_body(resp).await;
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
}

#[test_log::test(tokio::test)]
async fn test_health_check_returns_ok() {
    let app = TestApp::from_config(mock_config()).unwrap();

    let resp = app.router().oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "OK");
}

#[test_log::test(tokio::test)]
async fn test_root_returns_server_banner() {
    let app = TestApp::from_config(mock_config()).unwrap();

    let resp = app.router().oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "CookBot Server v0.0.1-SNAPSHOT");
}

#[test_log::test(tokio::test)]
async fn test_app_with_mock_provider_serves_chat() {
    let app = TestApp::from_config(mock_config()).unwrap();

    let req = post_json(
        "/api/chat/send",
        &json!({"message": "Hello", "userId": "user123"}),
    );

    let resp = app.router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(parse_body(resp).await["message"], "Mock response to: Hello");
}

#[test_log::test(tokio::test)]
async fn test_app_rejects_unknown_provider() {
    let result = TestApp::from_config(LlmConfig {
        provider: "bogus".to_string(),
        api_key: String::new(),
        model: "gpt-4o-mini".to_string(),
        base_url: None,
    });

    let err = result.err().unwrap();
    assert!(err.to_string().contains("Unknown LLM provider"));
}

#[test_log::test(tokio::test)]
async fn test_unknown_route_returns_404() {
    let (app, _model) = TestApp::scripted();

    let resp = app.router().oneshot(get("/api/unknown")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn test_get_on_send_route_returns_405() {
    let (app, _model) = TestApp::scripted();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/chat/send")
        .body(axum::body::Body::empty())
        .unwrap();

    let resp = app.router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
