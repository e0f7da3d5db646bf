// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! PDF text extraction

use std::panic::{self, AssertUnwindSafe};

use crate::error::LoadError;

/// Extract the text of every page, in page order.
pub(super) fn extract_pdf(bytes: &[u8]) -> Result<String, LoadError> {
    // pdf-extract panics on some malformed inputs instead of returning an error.
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(bytes)
    }));

    match outcome {
        Ok(Ok(text)) => {
            tracing::debug!(target: "mesh.document.loader", chars = text.len(), "pdf extracted");
            Ok(text)
        }
        Ok(Err(e)) => Err(LoadError::Parse(e.to_string())),
        Err(_) => Err(LoadError::Parse("malformed PDF".to_string())),
    }
}
