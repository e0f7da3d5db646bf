// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::error::{MeshError, Result};

use super::Settings;

impl Settings {
    /// Get the API key for Gemini, checking env var first.
    pub fn get_gemini_api_key(&self) -> Option<String> {
        // Priority: env var > config file.
        std::env::var(&self.providers.gemini.api_key_env)
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| self.providers.gemini.api_key.clone())
    }

    /// Get the API key for OpenRouter, checking env var first.
    pub fn get_openrouter_api_key(&self) -> Option<String> {
        std::env::var(&self.providers.openrouter.api_key_env)
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| self.providers.openrouter.api_key.clone())
    }

    /// Reject values the loader and prompt builder cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.loader.fetch_timeout_secs == 0 {
            return Err(MeshError::Config(
                "loader.fetch_timeout_secs must be >= 1".to_string(),
            ));
        }
        if self.questions.count == 0 {
            return Err(MeshError::Config("questions.count must be >= 1".to_string()));
        }
        if self.questions.excerpt_chars == 0 {
            return Err(MeshError::Config(
                "questions.excerpt_chars must be >= 1".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.defaults.temperature) {
            return Err(MeshError::Config(format!(
                "defaults.temperature must be within 0.0..=2.0 (got {})",
                self.defaults.temperature
            )));
        }
        Ok(())
    }

    /// Copy of the settings with stored API keys masked, for display.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.providers.gemini.api_key.is_some() {
            copy.providers.gemini.api_key = Some("********".to_string());
        }
        if copy.providers.openrouter.api_key.is_some() {
            copy.providers.openrouter.api_key = Some("********".to_string());
        }
        copy
    }
}
