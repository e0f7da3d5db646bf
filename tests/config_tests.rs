// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use mesh_ai::config::Settings;
use tempfile::TempDir;

#[test]
fn test_settings_default_values() {
    let settings = Settings::default();

    assert_eq!(settings.providers.gemini.default_model, "gemini-2.0-flash");
    assert_eq!(settings.providers.gemini.api_key_env, "GEMINI_API_KEY");
    assert_eq!(settings.defaults.provider, "gemini");
    assert!((settings.defaults.temperature - 0.7).abs() < f32::EPSILON);
    assert_eq!(settings.defaults.max_tokens, 8192);
}

#[test]
fn test_settings_loader_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.loader.fetch_timeout_secs, 10);
    assert!(settings.loader.cache_enabled);
    assert_eq!(settings.questions.count, 3);
    assert_eq!(settings.questions.excerpt_chars, 2000);
}

#[test]
fn test_settings_api_key_priority() {
    // Use a custom env var name to avoid test pollution
    let mut settings = Settings::default();
    settings.providers.gemini.api_key_env = "MESH_TEST_API_KEY_12345".to_string();
    settings.providers.gemini.api_key = Some("config-key".to_string());

    std::env::remove_var("MESH_TEST_API_KEY_12345");
    assert_eq!(settings.get_gemini_api_key(), Some("config-key".to_string()));

    std::env::set_var("MESH_TEST_API_KEY_12345", "env-key");
    assert_eq!(settings.get_gemini_api_key(), Some("env-key".to_string()));
    std::env::remove_var("MESH_TEST_API_KEY_12345");
}

#[test]
fn test_settings_empty_env_var_falls_back() {
    let mut settings = Settings::default();
    settings.providers.openrouter.api_key_env = "MESH_TEST_EMPTY_KEY_67890".to_string();
    settings.providers.openrouter.api_key = Some("stored".to_string());

    std::env::set_var("MESH_TEST_EMPTY_KEY_67890", "");
    assert_eq!(settings.get_openrouter_api_key(), Some("stored".to_string()));
    std::env::remove_var("MESH_TEST_EMPTY_KEY_67890");
}

#[test]
fn test_settings_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let mut settings = Settings::default();
    settings.defaults.provider = "openrouter".to_string();
    settings.loader.cache_enabled = false;
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded.defaults.provider, "openrouter");
    assert!(!loaded.loader.cache_enabled);
}

#[test]
fn test_settings_legacy_google_section_migrates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{"providers": {"google": {"default_model": "gemini-1.5-flash"}}}"#,
    )
    .unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded.providers.gemini.default_model, "gemini-1.5-flash");
}

#[test]
fn test_settings_invalid_json_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(Settings::load_from(&path).is_err());
}

#[test]
fn test_settings_validate() {
    assert!(Settings::default().validate().is_ok());

    let mut settings = Settings::default();
    settings.loader.fetch_timeout_secs = 0;
    assert!(settings.validate().is_err());

    let mut settings = Settings::default();
    settings.defaults.temperature = 3.5;
    assert!(settings.validate().is_err());
}

#[test]
fn test_settings_redacted_hides_keys() {
    let mut settings = Settings::default();
    settings.providers.gemini.api_key = Some("secret".to_string());

    let json = serde_json::to_string(&settings.redacted()).unwrap();
    assert!(!json.contains("secret"));
    assert!(json.contains("********"));
}
