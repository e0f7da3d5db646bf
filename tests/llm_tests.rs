// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use mesh_ai::error::{ApiError, MeshError};
use mesh_ai::llm::message::{Message, Role};
use mesh_ai::llm::mock_provider::{MockProvider, MockResponse};
use mesh_ai::llm::provider::{CompletionRequest, LlmProvider, StopReason, Usage};
use mesh_ai::llm::providers::GeminiProvider;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_message_user_creation() {
    let message = Message::user("Hello, world!");

    assert_eq!(message.role, Role::User);
    assert_eq!(message.content, "Hello, world!");
}

#[test]
fn test_message_serializes_lowercase_role() {
    let json = serde_json::to_value(Message::assistant("Hi")).unwrap();
    assert_eq!(json["role"], "assistant");
}

#[test]
fn test_completion_request_builder() {
    let request = CompletionRequest::prompt("gemini-2.0-flash", "Summarize this")
        .with_max_tokens(256)
        .with_temperature(0.2);

    assert_eq!(request.model, "gemini-2.0-flash");
    assert_eq!(request.messages, vec![Message::user("Summarize this")]);
    assert_eq!(request.max_tokens, 256);
    assert!((request.temperature - 0.2).abs() < f32::EPSILON);
}

#[test]
fn test_usage_total() {
    let usage = Usage {
        input_tokens: 7,
        output_tokens: 5,
    };
    assert_eq!(usage.total_tokens(), 12);
}

#[tokio::test]
async fn test_mock_provider_script() {
    let provider = MockProvider::new().with_script(vec![
        MockResponse::Text("first".to_string()),
        MockResponse::Error("offline".to_string()),
    ]);

    let ok = provider
        .complete(CompletionRequest::prompt("mock-model", "a"))
        .await
        .unwrap();
    assert_eq!(ok.text(), "first");

    let err = provider
        .complete(CompletionRequest::prompt("mock-model", "b"))
        .await
        .unwrap_err();
    assert!(matches!(err, MeshError::Api(ApiError::Network(_))));
    assert_eq!(provider.recorded_prompts(), vec!["a", "b"]);
}

#[tokio::test]
async fn test_gemini_sends_prompt_and_generation_config() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .and(header("x-goog-api-key", "key-1"))
        .and(body_partial_json(serde_json::json!({
            "contents": [{"role": "user", "parts": [{"text": "What is it?"}]}],
            "generationConfig": {"maxOutputTokens": 100}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "A report."}]},
                "finishReason": "MAX_TOKENS"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GeminiProvider::with_base_url("key-1", server.uri());
    let response = provider
        .complete(CompletionRequest::prompt("gemini-2.0-flash", "What is it?").with_max_tokens(100))
        .await
        .unwrap();

    assert_eq!(response.text(), "A report.");
    assert_eq!(response.stop_reason, Some(StopReason::MaxTokens));
}

#[tokio::test]
async fn test_gemini_rate_limit_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "error": {"code": 429, "message": "Resource exhausted", "status": "RESOURCE_EXHAUSTED"}
        })))
        .mount(&server)
        .await;

    let provider = GeminiProvider::with_base_url("key", server.uri());
    let err = provider
        .complete(CompletionRequest::prompt("gemini-2.0-flash", "q"))
        .await
        .unwrap_err();

    assert!(matches!(err, MeshError::Api(ApiError::RateLimited(_))));
}

#[tokio::test]
async fn test_gemini_server_error_carries_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": {"code": 500, "message": "backend failure"}
        })))
        .mount(&server)
        .await;

    let provider = GeminiProvider::with_base_url("key", server.uri());
    let err = provider
        .complete(CompletionRequest::prompt("gemini-2.0-flash", "q"))
        .await
        .unwrap_err();

    match err {
        MeshError::Api(ApiError::ServerError { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("backend failure"));
        }
        other => panic!("unexpected error {:?}", other),
    }
}
