//! Webhook end-to-end tests: router -> decoder -> dispatcher -> Telegram adapter
//! Run with: cargo test --test webhook_test

use std::sync::{Arc, Once};

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use httpmock::prelude::*;
use tower::ServiceExt as _;

use echo_bot::infrastructure::adapters::TelegramAdapter;
use echo_bot::infrastructure::config::{Config, TelegramConfig};
use echo_bot::infrastructure::server::router;
use echo_bot::{ResponseDispatcher, UpdateService};

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

const TOKEN: &str = "987654:INTEGRATION";

fn service_for(api_base: String) -> Arc<UpdateService> {
    let adapter = TelegramAdapter::new(&TelegramConfig {
        token: Some(TOKEN.to_string()),
        api_base,
        timeout_secs: 2,
    })
    .expect("adapter should build");
    Arc::new(UpdateService::new(Arc::new(adapter)))
}

fn webhook(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Scenario: plain text is echoed with the prefix
#[tokio::test]
async fn test_echo_reaches_telegram() {
    ensure_init();

    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("/bot{}/sendMessage", TOKEN))
                .x_www_form_urlencoded_tuple("chat_id", "42")
                .x_www_form_urlencoded_tuple("text", "Your message: hi");
            then.status(200).body(r#"{"ok":true,"result":{"message_id":10}}"#);
        })
        .await;

    let response = router(service_for(server.base_url()))
        .oneshot(webhook(r#"{"update_id":1,"message":{"text":"hi","chat":{"id":42}}}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(mock.hits_async().await, 1);
}

/// Scenario: /start gets the keyboard and nothing else
#[tokio::test]
async fn test_start_sends_keyboard() {
    ensure_init();

    let markup = ResponseDispatcher::start_keyboard().to_json().unwrap();
    let server = MockServer::start_async().await;
    let keyboard = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("/bot{}/sendMessage", TOKEN))
                .x_www_form_urlencoded_tuple("chat_id", "7")
                .x_www_form_urlencoded_tuple("text", "Please select an option:")
                .x_www_form_urlencoded_tuple("reply_markup", markup.as_str());
            then.status(200).body(r#"{"ok":true}"#);
        })
        .await;
    let echo = server
        .mock_async(|when, then| {
            when.method(POST).x_www_form_urlencoded_tuple("text", "Your message: /start");
            then.status(200).body(r#"{"ok":true}"#);
        })
        .await;

    let response = router(service_for(server.base_url()))
        .oneshot(webhook(r#"{"update_id":2,"message":{"text":"/start","chat":{"id":7}}}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(keyboard.hits_async().await, 1);
    assert_eq!(echo.hits_async().await, 0, "/start must not fall through to echo");
}

/// Scenario: garbage body makes no outbound call
#[tokio::test]
async fn test_not_json_makes_no_call() {
    ensure_init();

    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.any_request();
            then.status(200).body(r#"{"ok":true}"#);
        })
        .await;

    let response = router(service_for(server.base_url()))
        .oneshot(webhook("not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(mock.hits_async().await, 0);
}

/// Scenario: Telegram unreachable, webhook still answers 200
#[tokio::test]
async fn test_network_error_still_ok() {
    ensure_init();

    let response = router(service_for("http://127.0.0.1:1".to_string()))
        .oneshot(webhook(r#"{"update_id":3,"message":{"text":"hello","chat":{"id":5}}}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

/// Negative acknowledgement on the keyboard send is logged, not fatal
#[tokio::test]
async fn test_rejected_keyboard_still_ok() {
    ensure_init();

    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.any_request();
            then.status(200).body(r#"{"ok":false,"description":"Bad Request: chat not found"}"#);
        })
        .await;

    let service = service_for(server.base_url());
    let app = router(service.clone());

    let response = app
        .oneshot(webhook(r#"{"update_id":4,"message":{"text":"/start","chat":{"id":1}}}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The process keeps serving afterwards
    let response = router(service)
        .oneshot(webhook(r#"{"update_id":5,"message":{"text":"/start","chat":{"id":1}}}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(mock.hits_async().await, 2, "one call per update, no retry");
}

/// Same update delivered twice is sent twice
#[tokio::test]
async fn test_redelivery_is_not_deduplicated() {
    ensure_init();

    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).x_www_form_urlencoded_tuple("text", "Your message: again");
            then.status(200).body(r#"{"ok":true}"#);
        })
        .await;

    let service = service_for(server.base_url());
    let body = r#"{"update_id":6,"message":{"text":"again","chat":{"id":8}}}"#;
    for _ in 0..2 {
        let response = router(service.clone()).oneshot(webhook(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(mock.hits_async().await, 2);
}

/// Startup refuses to run without a token
#[test]
fn test_config_requires_token() {
    let mut config = Config::default();
    config
        .apply_env(|key| match key {
            "PORT" => Some("3000".to_string()),
            _ => None,
        })
        .unwrap();

    assert_eq!(config.server.port, 3000);
    assert!(config.validate().is_err());
}
