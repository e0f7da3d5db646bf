// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Document loading
//!
//! Turns a URL or an uploaded byte blob into plain text. Format support is
//! decided from the identifier's suffix before any bytes are fetched.

mod docx;
mod loader;
mod pdf;

pub use loader::{DocumentLoader, HttpDocumentLoader};

use crate::error::LoadError;

/// Where a document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Public URL to download
    Url(String),
    /// Bytes supplied directly, named by the uploaded file name
    Upload { filename: String, bytes: Vec<u8> },
}

/// Formats the loader can extract text from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentSource {
    /// Create a URL source
    pub fn url(url: impl Into<String>) -> Self {
        DocumentSource::Url(url.into())
    }

    /// Create an upload source
    pub fn upload(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        DocumentSource::Upload {
            filename: filename.into(),
            bytes,
        }
    }

    /// The URL or the filename; this becomes the session's `source_id`
    pub fn identifier(&self) -> &str {
        match self {
            DocumentSource::Url(url) => url,
            DocumentSource::Upload { filename, .. } => filename,
        }
    }

    /// Format implied by the identifier, or `UnsupportedFormat`
    pub fn format(&self) -> Result<DocumentFormat, LoadError> {
        DocumentFormat::detect(self.identifier())
    }
}

impl DocumentFormat {
    /// Detect the format from a case-insensitive `.pdf` / `.docx` suffix.
    pub fn detect(identifier: &str) -> Result<Self, LoadError> {
        let lower = identifier.trim().to_lowercase();
        if lower.ends_with(".pdf") {
            Ok(DocumentFormat::Pdf)
        } else if lower.ends_with(".docx") {
            Ok(DocumentFormat::Docx)
        } else {
            Err(LoadError::UnsupportedFormat(identifier.to_string()))
        }
    }

    /// Extract plain text from the raw bytes of this format.
    ///
    /// CPU-bound; async callers run it on the blocking pool.
    pub fn extract(self, bytes: &[u8]) -> Result<String, LoadError> {
        let text = match self {
            DocumentFormat::Pdf => pdf::extract_pdf(bytes)?,
            DocumentFormat::Docx => docx::extract_docx(bytes)?,
        };

        if text.trim().is_empty() {
            return Err(LoadError::EmptyExtraction);
        }
        Ok(text)
    }
}
