// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for Mesh AI
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for Mesh AI operations
#[derive(Error, Debug)]
pub enum MeshError {
    /// API-related errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Document loading errors
    #[error(transparent)]
    Load(#[from] LoadError),

    /// No usable language model (missing key, unknown provider)
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// API-specific error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Authentication failed (invalid API key)
    #[error("Authentication failed: invalid API key")]
    AuthenticationFailed,

    /// Rate limited by the API
    #[error("Rate limited: retry after {0} seconds")]
    RateLimited(u32),

    /// Requested model not found
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// Network connectivity error
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid response from API
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// API returned an error
    #[error("API error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Timeout waiting for response
    #[error("Request timed out")]
    Timeout,
}

/// Failures of the document loader.
///
/// The display strings are shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Download failed, timed out, or returned a non-success status
    #[error("Could not download file. Please check the URL. Details: {0}")]
    Network(String),

    /// Identifier does not end in a supported extension
    #[error("Unsupported file type. Please use a .pdf or .docx file.")]
    UnsupportedFormat(String),

    /// Parser produced no usable text
    #[error("Could not extract any text from the document.")]
    EmptyExtraction,

    /// Parser rejected the bytes
    #[error("Failed to process the file. Details: {0}")]
    Parse(String),
}

/// Result type alias for Mesh AI operations
pub type Result<T> = std::result::Result<T, MeshError>;

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LoadError::Network(format!("request timed out: {}", err))
        } else {
            LoadError::Network(err.to_string())
        }
    }
}

impl From<zip::result::ZipError> for LoadError {
    fn from(err: zip::result::ZipError) -> Self {
        LoadError::Parse(err.to_string())
    }
}
