// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for Mesh AI
//!
//! Handles loading and saving settings from ~/.mesh-ai/settings.json

use serde::{Deserialize, Serialize};

mod io;
mod migration;
mod validation;

/// Main settings structure, stored in ~/.mesh-ai/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// LLM provider configurations
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Default generation settings
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Document download and extraction settings
    #[serde(default)]
    pub loader: LoaderConfig,

    /// Suggested-question generation settings
    #[serde(default)]
    pub questions: QuestionsConfig,
}

/// Configuration for LLM providers
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProvidersConfig {
    /// Google Gemini configuration
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// OpenRouter configuration (OpenAI-compatible API)
    #[serde(default)]
    pub openrouter: OpenRouterConfig,
}

/// Gemini-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key (if stored directly, not recommended)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Environment variable name for API key
    #[serde(default = "default_gemini_api_key_env")]
    pub api_key_env: String,

    /// Default model to use
    #[serde(default = "default_gemini_model")]
    pub default_model: String,

    /// Base URL for API (for custom endpoints)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// OpenRouter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRouterConfig {
    /// API key (if stored directly, not recommended)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Environment variable name for API key
    #[serde(default = "default_openrouter_api_key_env")]
    pub api_key_env: String,

    /// Default model to use
    #[serde(default = "default_openrouter_model")]
    pub default_model: String,

    /// Base URL for API (for custom endpoints)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Default generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default provider to use
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Default temperature for LLM
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens for response
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

/// Document loader configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Timeout for downloading a document by URL
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Cache extracted text by identifier for the process lifetime
    #[serde(default = "default_true")]
    pub cache_enabled: bool,

    /// User-Agent sent with downloads
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Suggested-question configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsConfig {
    /// How many questions to request from the model
    #[serde(default = "default_question_count")]
    pub count: usize,

    /// Leading characters of the document fed into the question prompt
    #[serde(default = "default_excerpt_chars")]
    pub excerpt_chars: usize,
}

fn default_gemini_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_openrouter_api_key_env() -> String {
    "OPENROUTER_API_KEY".to_string()
}

fn default_openrouter_model() -> String {
    "google/gemini-2.0-flash-001".to_string()
}

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    8192
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

fn default_user_agent() -> String {
    format!("mesh-ai/{}", env!("CARGO_PKG_VERSION"))
}

fn default_question_count() -> usize {
    3
}

fn default_excerpt_chars() -> usize {
    2000
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: default_gemini_api_key_env(),
            default_model: default_gemini_model(),
            base_url: None,
        }
    }
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: default_openrouter_api_key_env(),
            default_model: default_openrouter_model(),
            base_url: None,
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: default_fetch_timeout_secs(),
            cache_enabled: true,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for QuestionsConfig {
    fn default() -> Self {
        Self {
            count: default_question_count(),
            excerpt_chars: default_excerpt_chars(),
        }
    }
}
