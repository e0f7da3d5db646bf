// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! AI responder
//!
//! Turns a prompt into text. Failures never propagate: a missing provider
//! or a provider error comes back as human-readable text that the caller
//! displays like any other reply.

use std::sync::Arc;

use crate::config::Settings;
use crate::llm::factory::ProviderFactory;
use crate::llm::provider::{CompletionRequest, LlmProvider};

/// Reply used when no provider could be configured
pub const MODEL_UNAVAILABLE_REPLY: &str = "AI model not available.";

/// Prompt-in, text-out wrapper around an optional LLM provider
#[derive(Clone)]
pub struct Responder {
    provider: Option<Arc<dyn LlmProvider>>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl Responder {
    /// Responder backed by `provider`, using the settings' generation defaults
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        let defaults = crate::config::DefaultsConfig::default();
        Self {
            provider: Some(provider),
            model: model.into(),
            temperature: defaults.temperature,
            max_tokens: defaults.max_tokens,
        }
    }

    /// Responder with no model; every call returns the unavailable reply
    pub fn unavailable() -> Self {
        let defaults = crate::config::DefaultsConfig::default();
        Self {
            provider: None,
            model: String::new(),
            temperature: defaults.temperature,
            max_tokens: defaults.max_tokens,
        }
    }

    /// Build from settings; a provider that cannot be created leaves the
    /// responder unavailable.
    pub fn from_settings(
        settings: &Settings,
        provider_name: Option<&str>,
        model: Option<&str>,
    ) -> Self {
        let name = provider_name.unwrap_or(settings.defaults.provider.as_str());
        let responder = match ProviderFactory::create(name, settings) {
            Ok(provider) => {
                let model = model
                    .map(str::to_string)
                    .unwrap_or_else(|| ProviderFactory::default_model(name, settings));
                if !provider.supports_model(&model) {
                    tracing::warn!(
                        target: "mesh.llm",
                        provider = name,
                        model = %model,
                        "model not recognised by provider; sending as given"
                    );
                }
                tracing::info!(target: "mesh.llm", provider = name, model = %model, "AI model configured");
                Self::new(provider, model)
            }
            Err(e) => {
                tracing::warn!(target: "mesh.llm", provider = name, error = %e, "AI model not configured");
                Self::unavailable()
            }
        };
        responder
            .with_temperature(settings.defaults.temperature)
            .with_max_tokens(settings.defaults.max_tokens)
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Whether a provider is configured
    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    /// Model identifier, empty when unavailable
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Complete `prompt`, degrading every failure to descriptive text.
    pub async fn complete(&self, prompt: &str) -> String {
        let Some(provider) = &self.provider else {
            return MODEL_UNAVAILABLE_REPLY.to_string();
        };

        let request = CompletionRequest::prompt(&self.model, prompt)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens);

        match provider.complete(request).await {
            Ok(response) => {
                tracing::debug!(
                    target: "mesh.llm",
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    total_tokens = response.usage.total_tokens(),
                    "completion finished"
                );
                response.text()
            }
            Err(e) => {
                tracing::warn!(target: "mesh.llm", error = %e, "completion failed");
                format!("An error occurred with the AI model: {}", e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::mock_provider::MockProvider;

    #[tokio::test]
    async fn test_unavailable_reply() {
        let responder = Responder::unavailable();
        assert!(!responder.is_available());
        assert_eq!(responder.complete("hi").await, "AI model not available.");
    }

    #[tokio::test]
    async fn test_success_returns_text() {
        let mock = MockProvider::new().with_response("answer");
        let responder = Responder::new(Arc::new(mock.clone()), "mock-model");
        assert_eq!(responder.complete("question").await, "answer");
        assert_eq!(mock.recorded_prompts(), vec!["question"]);
    }

    #[tokio::test]
    async fn test_error_becomes_text() {
        let mock = MockProvider::new().failing("boom");
        let responder = Responder::new(Arc::new(mock), "mock-model");
        let reply = responder.complete("q").await;
        assert!(reply.starts_with("An error occurred with the AI model: "));
        assert!(reply.contains("boom"));
    }

    #[tokio::test]
    async fn test_request_carries_generation_settings() {
        let mock = MockProvider::new();
        let responder = Responder::new(Arc::new(mock.clone()), "mock-model")
            .with_temperature(0.1)
            .with_max_tokens(42);
        responder.complete("q").await;

        let request = mock.last_request().unwrap();
        assert_eq!(request.model, "mock-model");
        assert_eq!(request.temperature, 0.1);
        assert_eq!(request.max_tokens, 42);
    }

    #[test]
    fn test_from_settings_without_key_is_unavailable() {
        let mut settings = Settings::default();
        settings.providers.gemini.api_key_env = "MESH_RESPONDER_TEST_NO_KEY".to_string();
        let responder = Responder::from_settings(&settings, None, None);
        assert!(!responder.is_available());
    }

    #[test]
    fn test_from_settings_with_key_uses_default_model() {
        let mut settings = Settings::default();
        settings.providers.gemini.api_key_env = "MESH_RESPONDER_TEST_NO_KEY".to_string();
        settings.providers.gemini.api_key = Some("k".to_string());
        let responder = Responder::from_settings(&settings, None, None);
        assert!(responder.is_available());
        assert_eq!(responder.model(), "gemini-2.0-flash");

        let responder = Responder::from_settings(&settings, Some("gemini"), Some("gemini-1.5-pro"));
        assert_eq!(responder.model(), "gemini-1.5-pro");
    }

    #[test]
    fn test_from_settings_keeps_unrecognised_model() {
        let mut settings = Settings::default();
        settings.providers.openrouter.api_key_env = "MESH_RESPONDER_TEST_NO_KEY".to_string();
        settings.providers.openrouter.api_key = Some("k".to_string());

        let responder = Responder::from_settings(&settings, Some("openrouter"), Some("gpt-4o"));
        assert!(responder.is_available());
        assert_eq!(responder.model(), "gpt-4o");
    }
}
