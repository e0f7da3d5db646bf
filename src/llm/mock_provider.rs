// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Mock LLM provider for testing
//!
//! Provides a configurable mock implementation of the LlmProvider trait
//! that can be used in tests without making real API calls.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{ApiError, MeshError, Result};
use crate::llm::provider::{
    CompletionRequest, CompletionResponse, ContentBlockResponse, LlmProvider, StopReason,
    Usage,
};

/// A mock LLM provider for testing
#[derive(Clone)]
pub struct MockProvider {
    /// Provider name
    name: String,
    /// Configured responses
    responses: Arc<Mutex<Vec<MockResponse>>>,
    /// Call counter
    call_count: Arc<AtomicUsize>,
    /// Recorded requests
    recorded_requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A pre-configured response for the mock provider
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Successful completion with this text
    Text(String),
    /// Provider failure with this message
    Error(String),
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::warn!("Mock provider lock was poisoned, recovering");
            poisoned.into_inner()
        }
    }
}

impl MockProvider {
    /// Create a new mock provider
    pub fn new() -> Self {
        Self {
            name: "mock".to_string(),
            responses: Arc::new(Mutex::new(vec![MockResponse::default()])),
            call_count: Arc::new(AtomicUsize::new(0)),
            recorded_requests: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Set a single text response, returned for every call
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.set_responses(vec![MockResponse::Text(text.into())]);
        self
    }

    /// Queue multiple responses (returned in order, the last one repeats)
    pub fn with_responses(self, texts: Vec<String>) -> Self {
        self.set_responses(texts.into_iter().map(MockResponse::Text).collect());
        self
    }

    /// Queue an explicit script of successes and failures
    pub fn with_script(self, script: Vec<MockResponse>) -> Self {
        self.set_responses(script);
        self
    }

    /// Fail every call with the given message
    pub fn failing(self, message: impl Into<String>) -> Self {
        self.set_responses(vec![MockResponse::Error(message.into())]);
        self
    }

    fn set_responses(&self, script: Vec<MockResponse>) {
        let mut responses = lock(&self.responses);
        *responses = script;
    }

    /// Get the number of times complete() was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Get all recorded requests
    pub fn recorded_requests(&self) -> Vec<CompletionRequest> {
        lock(&self.recorded_requests).clone()
    }

    /// Prompt text of every recorded request, in call order
    pub fn recorded_prompts(&self) -> Vec<String> {
        lock(&self.recorded_requests)
            .iter()
            .map(|r| {
                r.messages
                    .iter()
                    .map(|m| m.content.as_str())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect()
    }

    /// Get the last request made
    pub fn last_request(&self) -> Option<CompletionRequest> {
        lock(&self.recorded_requests).last().cloned()
    }

    /// Reset call count and recorded requests
    pub fn reset(&self) {
        self.call_count.store(0, Ordering::SeqCst);
        lock(&self.recorded_requests).clear();
    }

    /// Get the next response
    fn next_response(&self) -> MockResponse {
        let count = self.call_count.fetch_add(1, Ordering::SeqCst);
        let responses = lock(&self.responses);
        if responses.is_empty() {
            MockResponse::default()
        } else {
            responses[count.min(responses.len() - 1)].clone()
        }
    }
}

impl Default for MockResponse {
    fn default() -> Self {
        MockResponse::Text("Mock response".to_string())
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn supports_model(&self, model: &str) -> bool {
        model == "mock-model"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        lock(&self.recorded_requests).push(request.clone());

        match self.next_response() {
            MockResponse::Text(text) => Ok(CompletionResponse {
                id: format!("mock_{}", self.call_count()),
                model: request.model,
                content: vec![ContentBlockResponse::Text { text }],
                stop_reason: Some(StopReason::EndTurn),
                usage: Usage {
                    input_tokens: 10,
                    output_tokens: 20,
                },
            }),
            MockResponse::Error(message) => Err(MeshError::Api(ApiError::Network(message))),
        }
    }
}
