// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use mesh_ai::error::{ApiError, LoadError, MeshError};

#[test]
fn test_load_error_user_messages() {
    assert_eq!(
        LoadError::Network("HTTP 404".to_string()).to_string(),
        "Could not download file. Please check the URL. Details: HTTP 404"
    );
    assert_eq!(
        LoadError::EmptyExtraction.to_string(),
        "Could not extract any text from the document."
    );
    assert_eq!(
        LoadError::Parse("bad header".to_string()).to_string(),
        "Failed to process the file. Details: bad header"
    );
    assert_eq!(
        LoadError::UnsupportedFormat("a.txt".to_string()).to_string(),
        "Unsupported file type. Please use a .pdf or .docx file."
    );
}

#[test]
fn test_load_error_converts_to_mesh_error() {
    let err: MeshError = LoadError::UnsupportedFormat("a.txt".to_string()).into();
    assert!(matches!(err, MeshError::Load(LoadError::UnsupportedFormat(_))));
}

#[test]
fn test_api_error_display() {
    assert_eq!(
        ApiError::AuthenticationFailed.to_string(),
        "Authentication failed: invalid API key"
    );
    assert_eq!(ApiError::Timeout.to_string(), "Request timed out");
    assert!(ApiError::ModelNotFound("gemini-x".to_string())
        .to_string()
        .contains("gemini-x"));
}

#[test]
fn test_mesh_error_from_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: MeshError = json_err.into();
    assert!(err.to_string().starts_with("JSON error"));
}

#[test]
fn test_model_unavailable_message() {
    let err = MeshError::ModelUnavailable("GEMINI_API_KEY environment variable not set.".into());
    assert_eq!(
        err.to_string(),
        "Model unavailable: GEMINI_API_KEY environment variable not set."
    );
}
