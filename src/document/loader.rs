// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Document loader
//!
//! Downloads (for URLs), extracts, and caches document text.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use sha2::{Digest, Sha256};

use crate::config::LoaderConfig;
use crate::error::LoadError;

use super::DocumentSource;

/// Turns a document source into plain text
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    /// Load and extract the document's text.
    async fn load(&self, source: &DocumentSource) -> Result<String, LoadError>;
}

/// Loader backed by an HTTP client, with a per-process extraction cache
#[derive(Clone)]
pub struct HttpDocumentLoader {
    client: Client,
    cache: Option<Arc<Mutex<HashMap<String, String>>>>,
}

impl HttpDocumentLoader {
    /// Build a loader from the loader settings
    pub fn new(config: &LoaderConfig) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| LoadError::Network(format!("could not build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            cache: config
                .cache_enabled
                .then(|| Arc::new(Mutex::new(HashMap::new()))),
        })
    }

    /// Number of cached extractions
    pub fn cached_entries(&self) -> usize {
        self.cache
            .as_ref()
            .map(|c| c.lock().map(|m| m.len()).unwrap_or(0))
            .unwrap_or(0)
    }

    /// Cache key: the URL itself, or the filename plus a content digest
    fn cache_key(source: &DocumentSource) -> String {
        match source {
            DocumentSource::Url(url) => format!("url:{}", url),
            DocumentSource::Upload { filename, bytes } => {
                let digest = Sha256::digest(bytes);
                let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
                format!("upload:{}:{}", filename, hex)
            }
        }
    }

    fn cached(&self, key: &str) -> Option<String> {
        let cache = self.cache.as_ref()?;
        let guard = cache.lock().ok()?;
        guard.get(key).cloned()
    }

    fn remember(&self, key: String, text: &str) {
        if let Some(cache) = &self.cache {
            if let Ok(mut guard) = cache.lock() {
                guard.insert(key, text.to_string());
            }
        }
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Network(format!(
                "HTTP {} for url ({})",
                status.as_u16(),
                url
            )));
        }
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl DocumentLoader for HttpDocumentLoader {
    async fn load(&self, source: &DocumentSource) -> Result<String, LoadError> {
        // Unsupported suffixes fail before any network traffic.
        let format = source.format()?;

        let key = Self::cache_key(source);
        if let Some(text) = self.cached(&key) {
            tracing::debug!(
                target: "mesh.document.loader",
                source = source.identifier(),
                "extraction cache hit"
            );
            return Ok(text);
        }

        let bytes = match source {
            DocumentSource::Url(url) => {
                tracing::info!(target: "mesh.document.loader", url = %url, "downloading document");
                self.download(url).await?
            }
            DocumentSource::Upload { bytes, .. } => bytes.clone(),
        };
        let byte_count = bytes.len();

        let text = tokio::task::spawn_blocking(move || format.extract(&bytes))
            .await
            .map_err(|e| LoadError::Parse(e.to_string()))??;

        tracing::info!(
            target: "mesh.document.loader",
            source = source.identifier(),
            bytes = byte_count,
            chars = text.chars().count(),
            "document extracted"
        );

        self.remember(key, &text);
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader() -> HttpDocumentLoader {
        HttpDocumentLoader::new(&LoaderConfig::default()).unwrap()
    }

    #[test]
    fn test_cache_key_url() {
        let key = HttpDocumentLoader::cache_key(&DocumentSource::url("https://x.test/a.pdf"));
        assert_eq!(key, "url:https://x.test/a.pdf");
    }

    #[test]
    fn test_cache_key_upload_depends_on_content() {
        let a = HttpDocumentLoader::cache_key(&DocumentSource::upload("a.pdf", b"one".to_vec()));
        let b = HttpDocumentLoader::cache_key(&DocumentSource::upload("a.pdf", b"two".to_vec()));
        assert_ne!(a, b);
        assert!(a.starts_with("upload:a.pdf:"));
    }

    #[test]
    fn test_cache_disabled() {
        let config = LoaderConfig {
            cache_enabled: false,
            ..LoaderConfig::default()
        };
        let loader = HttpDocumentLoader::new(&config).unwrap();
        loader.remember("k".to_string(), "text");
        assert_eq!(loader.cached_entries(), 0);
        assert!(loader.cached("k").is_none());
    }

    #[tokio::test]
    async fn test_unsupported_url_fails_without_request() {
        // Unroutable address: a request attempt would surface as Network, not UnsupportedFormat.
        let err = loader()
            .load(&DocumentSource::url("http://127.0.0.1:9/notes.txt"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            LoadError::UnsupportedFormat("http://127.0.0.1:9/notes.txt".to_string())
        );
    }

    #[tokio::test]
    async fn test_cache_hit_skips_extraction() {
        let loader = loader();
        let source = DocumentSource::upload("cached.pdf", b"not a real pdf".to_vec());
        loader.remember(HttpDocumentLoader::cache_key(&source), "cached text");

        let text = loader.load(&source).await.unwrap();
        assert_eq!(text, "cached text");
    }

    #[tokio::test]
    async fn test_failed_extraction_is_not_cached() {
        let loader = loader();
        let source = DocumentSource::upload("broken.docx", b"garbage".to_vec());

        assert!(matches!(
            loader.load(&source).await,
            Err(LoadError::Parse(_))
        ));
        assert_eq!(loader.cached_entries(), 0);
    }
}
