// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use reqwest::header::{HeaderMap, RETRY_AFTER};

use crate::error::{ApiError, MeshError};

/// Parse numeric Retry-After header (seconds).
pub(crate) fn parse_retry_after_seconds(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok())
}

/// Map a non-success HTTP status and its extracted message to an API error.
pub(crate) fn status_error(status: u16, message: String, retry_after: Option<u64>) -> MeshError {
    let err = match status {
        401 | 403 => ApiError::AuthenticationFailed,
        404 => ApiError::ModelNotFound(message),
        408 | 504 => ApiError::Timeout,
        429 => ApiError::RateLimited(retry_after.unwrap_or(60).min(u32::MAX as u64) as u32),
        _ => ApiError::ServerError { status, message },
    };
    MeshError::Api(err)
}

/// Map a transport failure (connect, timeout, body) to an API error.
pub(crate) fn transport_error(err: reqwest::Error) -> MeshError {
    if err.is_timeout() {
        MeshError::Api(ApiError::Timeout)
    } else if err.is_connect() {
        MeshError::Api(ApiError::Network(err.to_string()))
    } else {
        MeshError::Http(err)
    }
}
