//! HTTP mentor client tests against a wiremock server.
//!
//! Covers the request shape, both reply fields, the no-field fallback, and
//! every failure path (non-2xx with and without a body, non-JSON body,
//! unreachable host).

#![cfg(feature = "http")]

use serde_json::json;
use taskflow::chat::NO_REPLY_FALLBACK;
use taskflow::{ChatError, Config, HttpMentorClient, MentorClient, TutorChat};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============= Helper Functions =============

async fn mentor_server(response: ResponseTemplate) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/mentor/chat"))
        .respond_with(response)
        .mount(&mock_server)
        .await;

    mock_server
}

// ============= Success Tests =============

#[tokio::test]
async fn test_posts_message_as_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/mentor/chat"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "message": "Explain BFS" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "Use a queue." })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpMentorClient::new(&mock_server.uri());
    let reply = client.chat("Explain BFS").await.unwrap();

    assert_eq!(reply.as_deref(), Some("Use a queue."));
}

#[tokio::test]
async fn test_reply_field_verbatim() {
    let text = "  Two pointers:\n1. sort\n2. squeeze  ";
    let mock_server = mentor_server(
        ResponseTemplate::new(200).set_body_json(json!({
            "reply": text,
            "message": "not this one",
            "recommendations": [],
            "next_steps": ["practice"]
        })),
    )
    .await;

    let client = HttpMentorClient::new(&mock_server.uri());
    assert_eq!(client.chat("hi").await.unwrap().as_deref(), Some(text));
}

#[tokio::test]
async fn test_message_field_fallback() {
    let mock_server =
        mentor_server(ResponseTemplate::new(200).set_body_json(json!({ "message": "hello from message" })))
            .await;

    let client = HttpMentorClient::new(&mock_server.uri());
    assert_eq!(
        client.chat("hi").await.unwrap().as_deref(),
        Some("hello from message")
    );
}

#[tokio::test]
async fn test_neither_field_resolves_to_placeholder() {
    let mock_server =
        mentor_server(ResponseTemplate::new(200).set_body_json(json!({ "detail": "ok" }))).await;

    let client = HttpMentorClient::new(&mock_server.uri());
    let outcome = client.chat("hi").await;
    assert_eq!(outcome, Ok(None));

    let mut chat = TutorChat::new();
    chat.set_input("hi");
    chat.submit();
    chat.resolve(outcome);
    assert_eq!(chat.messages().last().unwrap().content(), NO_REPLY_FALLBACK);
}

#[tokio::test]
async fn test_trailing_slash_base() {
    let mock_server =
        mentor_server(ResponseTemplate::new(200).set_body_json(json!({ "reply": "ok" }))).await;

    let config = Config::with_api_base(format!("{}/", mock_server.uri()));
    let client = HttpMentorClient::from_config(&config);
    assert_eq!(client.url(), format!("{}/mentor/chat", mock_server.uri()));
    assert_eq!(client.chat("hi").await.unwrap().as_deref(), Some("ok"));
}

// ============= Error Handling Tests =============

#[tokio::test]
async fn test_error_status_with_body() {
    let mock_server = mentor_server(
        ResponseTemplate::new(500).set_body_string(r#"{"detail":"Ollama error: model not found"}"#),
    )
    .await;

    let client = HttpMentorClient::new(&mock_server.uri());
    let err = client.chat("hi").await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(
        err.to_string(),
        r#"Request failed 500: {"detail":"Ollama error: model not found"}"#
    );
}

#[tokio::test]
async fn test_error_status_without_body_uses_reason() {
    let mock_server = mentor_server(ResponseTemplate::new(401)).await;

    let client = HttpMentorClient::new(&mock_server.uri());
    let err = client.chat("hi").await.unwrap_err();

    assert_eq!(
        err,
        ChatError::Status {
            status: 401,
            message: "Unauthorized".to_string()
        }
    );
}

#[tokio::test]
async fn test_non_json_success_body_is_failure() {
    let mock_server =
        mentor_server(ResponseTemplate::new(200).set_body_string("<html>proxy</html>")).await;

    let client = HttpMentorClient::new(&mock_server.uri());
    let err = client.chat("hi").await.unwrap_err();

    assert!(matches!(err, ChatError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_host() {
    // Port 9 (discard) on localhost is closed on test machines.
    let client = HttpMentorClient::new("http://127.0.0.1:9");
    let err = client.chat("hi").await.unwrap_err();

    assert!(matches!(err, ChatError::Network(_)));
    assert!(err.to_string().starts_with("Network error: "));
}

#[tokio::test]
async fn test_failure_becomes_demo_mode_message() {
    let mock_server = mentor_server(ResponseTemplate::new(502).set_body_string("upstream down")).await;

    let client = HttpMentorClient::new(&mock_server.uri());
    let mut chat = TutorChat::new();
    chat.set_input("  are you there?  ");

    let message = chat.submit().unwrap();
    let outcome = client.chat(&message).await;
    chat.resolve(outcome);

    let last = chat.messages().last().unwrap();
    assert!(last.content().starts_with("Demo mode: backend not connected."));
    assert!(last.content().contains("Request failed 502: upstream down"));
    assert!(!chat.is_in_flight());
    assert_eq!(chat.messages().len(), 3);
}
