// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Document session state
//!
//! A `Session` holds one loaded document and the conversation about it.
//! It is owned by a single controller and replaced wholesale when a new
//! document loads.

use serde::{Deserialize, Serialize};

/// Who authored a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl TurnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Assistant => "assistant",
        }
    }
}

/// One message in the chat history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }
}

/// Lifecycle state of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// No document loaded
    Empty,
    /// A load is in progress
    Loading,
    /// Document loaded and chat active
    Ready,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SessionState::Empty => "EMPTY",
            SessionState::Loading => "LOADING",
            SessionState::Ready => "READY",
        };
        write!(f, "{}", s)
    }
}

/// The active unit of work: one document plus its conversation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// URL or filename of the loaded document
    pub source_id: Option<String>,
    /// Full extracted text; non-empty exactly when `source_id` is set
    pub document_text: String,
    pub summary: String,
    pub example_questions: Vec<String>,
    pub chat_history: Vec<Turn>,
    /// Set by a suggested-question click, consumed by the next resolution
    pub pending_question: Option<String>,
}

impl Session {
    /// Session for a freshly loaded document with nothing derived yet
    pub fn loaded(source_id: impl Into<String>, document_text: impl Into<String>) -> Self {
        Self {
            source_id: Some(source_id.into()),
            document_text: document_text.into(),
            ..Self::default()
        }
    }

    /// Whether `identifier` names the document already loaded
    pub fn is_current(&self, identifier: &str) -> bool {
        self.source_id.as_deref() == Some(identifier)
    }

    /// Drop the conversation, keep the document and its derivations
    pub fn clear_chat(&mut self) {
        self.chat_history.clear();
    }

    /// Return to the EMPTY-equivalent state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Read-and-clear the pending suggested question
    pub fn take_pending(&mut self) -> Option<String> {
        self.pending_question.take()
    }
}

/// Read-only view of a session handed to the front end for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub source_id: Option<String>,
    pub summary: String,
    pub example_questions: Vec<String>,
    pub chat_history: Vec<Turn>,
    /// Character count of the document text
    pub document_chars: usize,
}

impl SessionSnapshot {
    pub fn from_session(session: &Session, state: SessionState) -> Self {
        Self {
            state,
            source_id: session.source_id.clone(),
            summary: session.summary.clone(),
            example_questions: session.example_questions.clone(),
            chat_history: session.chat_history.clone(),
            document_chars: session.document_text.chars().count(),
        }
    }

    /// The most recent assistant reply, if any
    pub fn last_reply(&self) -> Option<&str> {
        self.chat_history
            .iter()
            .rev()
            .find(|t| t.role == TurnRole::Assistant)
            .map(|t| t.content.as_str())
    }
}
