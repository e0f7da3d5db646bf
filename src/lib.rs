// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Mesh AI - chat with a document from your terminal.
//!
//! This crate exposes the runtime used by the `mesh-ai` CLI (`src/main.rs`).
//!
//! Architecture highlights:
//! - `document`: URL download, PDF/DOCX text extraction, extraction cache
//! - `chat`: the document session state machine and its prompts
//! - `llm`: provider abstraction and implementations (Gemini/OpenRouter)
//! - `config`: JSON settings with env-var API keys
//! - `cli`: clap argument definitions

pub mod chat;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod llm;

pub use error::{MeshError, Result};
