#![allow(clippy::unwrap_used)]
//! HTTP contract tests for the translation client.
//!
//! Each test drives the client against a local mock server and checks one
//! side of the contract: what we send (bearer header, JSON body with the
//! source text and target language) and how we handle what comes back
//! (both completion shapes, auth failures, server errors, junk).

use mockito::{Matcher, Server};
use serde_json::json;

use anuvad::translation::{
    Direction, Language, TranslationClient, TranslationError, TranslationRequest,
};

fn into_nepali(text: &str) -> TranslationRequest {
    TranslationRequest::new(text, Direction::to(Language::Nepali), "test-model").unwrap()
}

#[tokio::test]
async fn test_chat_shape_returns_message_content() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"message":{"content":"नमस्ते"}}],"usage":{"total_tokens":12}}"#)
        .create_async()
        .await;

    let client = TranslationClient::new(server.url(), "test-key".to_string());
    let result = client.translate(&into_nepali("hello")).await.unwrap();

    assert_eq!(result.translated_text, "नमस्ते");
    assert_eq!(result.tokens_used, Some(12));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_plain_completion_shape_returns_text() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"text":"नमस्ते"}]}"#)
        .create_async()
        .await;

    let client = TranslationClient::new(server.url(), "test-key".to_string());
    let result = client.translate(&into_nepali("hello")).await.unwrap();

    assert_eq!(result.translated_text, "नमस्ते");
    assert_eq!(result.tokens_used, None);
}

#[tokio::test]
async fn test_request_carries_bearer_key_text_and_target() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({"model": "test-model"})),
            Matcher::Regex("Good morning".to_string()),
            Matcher::Regex("Nepali".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"message":{"content":"शुभ प्रभात"}}]}"#)
        .create_async()
        .await;

    let client = TranslationClient::new(server.url(), "test-key".to_string());
    let result = client.translate(&into_nepali("Good morning")).await.unwrap();

    assert_eq!(result.translated_text, "शुभ प्रभात");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_surfaces_as_request_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let client = TranslationClient::new(server.url(), "test-key".to_string());
    let err = client.translate(&into_nepali("hello")).await.unwrap_err();

    assert!(matches!(err, TranslationError::RequestFailed(_)));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_unauthorized_surfaces_as_auth_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(401)
        .with_body(r#"{"error":{"message":"Invalid API Key"}}"#)
        .create_async()
        .await;

    let client = TranslationClient::new(server.url(), "bad-key".to_string());
    let err = client.translate(&into_nepali("hello")).await.unwrap_err();

    assert!(matches!(err, TranslationError::AuthFailed(_)));
    assert!(err.to_string().contains("API key"));
}

#[tokio::test]
async fn test_empty_choices_surfaces_as_unexpected_response() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let client = TranslationClient::new(server.url(), "test-key".to_string());
    let err = client.translate(&into_nepali("hello")).await.unwrap_err();

    assert!(matches!(err, TranslationError::UnexpectedResponse(_)));
}

#[tokio::test]
async fn test_non_json_body_surfaces_as_unexpected_response() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create_async()
        .await;

    let client = TranslationClient::new(server.url(), "test-key".to_string());
    let err = client.translate(&into_nepali("hello")).await.unwrap_err();

    assert!(matches!(err, TranslationError::UnexpectedResponse(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_surfaces_as_request_failure() {
    // Port 1 on localhost refuses connections
    let client = TranslationClient::new("http://127.0.0.1:1".to_string(), "test-key".to_string());
    let err = client.translate(&into_nepali("hello")).await.unwrap_err();

    assert!(matches!(err, TranslationError::RequestFailed(_)));
}
