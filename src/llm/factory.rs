// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Provider factory for creating LLM providers

use std::sync::Arc;

use crate::config::Settings;
use crate::error::{MeshError, Result};
use crate::llm::provider::LlmProvider;
use crate::llm::providers::{GeminiProvider, OpenRouterProvider};

/// Factory for creating LLM providers
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create an LLM provider based on provider name and settings
    ///
    /// # Arguments
    /// * `provider_name` - One of: "gemini", "openrouter"
    /// * `settings` - Application settings containing provider configuration
    pub fn create(provider_name: &str, settings: &Settings) -> Result<Arc<dyn LlmProvider>> {
        match provider_name {
            "gemini" => Self::create_gemini(settings),
            "openrouter" => Self::create_openrouter(settings),
            other => Err(MeshError::ModelUnavailable(format!(
                "Unknown provider '{}'. Use 'gemini' or 'openrouter'.",
                other
            ))),
        }
    }

    /// Create a Gemini provider
    pub fn create_gemini(settings: &Settings) -> Result<Arc<dyn LlmProvider>> {
        let api_key = settings.get_gemini_api_key().ok_or_else(|| {
            MeshError::ModelUnavailable(format!(
                "{} environment variable not set.",
                settings.providers.gemini.api_key_env
            ))
        })?;

        let provider = if let Some(ref base_url) = settings.providers.gemini.base_url {
            GeminiProvider::with_base_url(api_key, base_url)
        } else {
            GeminiProvider::new(api_key)
        };

        Ok(Arc::new(provider))
    }

    /// Create an OpenRouter provider
    pub fn create_openrouter(settings: &Settings) -> Result<Arc<dyn LlmProvider>> {
        let api_key = settings.get_openrouter_api_key().ok_or_else(|| {
            MeshError::ModelUnavailable(format!(
                "{} environment variable not set.",
                settings.providers.openrouter.api_key_env
            ))
        })?;

        let provider = if let Some(ref base_url) = settings.providers.openrouter.base_url {
            OpenRouterProvider::with_base_url(api_key, base_url)
        } else {
            OpenRouterProvider::new(api_key)
        };

        Ok(Arc::new(provider))
    }

    /// Get the default model for a provider
    pub fn default_model(provider_name: &str, settings: &Settings) -> String {
        match provider_name {
            "openrouter" => settings.providers.openrouter.default_model.clone(),
            _ => settings.providers.gemini.default_model.clone(),
        }
    }
}
