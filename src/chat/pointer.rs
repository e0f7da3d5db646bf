// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Persisted source pointer
//!
//! Remembers the URL of the loaded document in `source.json` so a later
//! `chat --resume` can reopen it. Uploads are never recorded.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct PointerFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file_url: Option<String>,
}

/// Handle to the pointer file
#[derive(Debug, Clone)]
pub struct SourcePointer {
    path: PathBuf,
}

impl Default for SourcePointer {
    fn default() -> Self {
        Self::new(Settings::source_pointer_path())
    }
}

impl SourcePointer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The recorded URL, if any. A missing or unreadable file means none.
    pub fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<PointerFile>(&content) {
            Ok(file) => file.file_url.filter(|u| !u.trim().is_empty()),
            Err(e) => {
                tracing::warn!(
                    target: "mesh.chat.controller",
                    path = %self.path.display(),
                    error = %e,
                    "ignoring unreadable source pointer"
                );
                None
            }
        }
    }

    /// Record `url` as the current document
    pub fn save(&self, url: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = PointerFile {
            file_url: Some(url.to_string()),
        };
        std::fs::write(&self.path, serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }

    /// Forget the recorded URL
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
