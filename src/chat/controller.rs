// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Session controller
//!
//! Drives the document session through EMPTY, LOADING and READY. Each
//! event is handled to completion, including any loader and responder
//! calls, before the next one is accepted; `handle` takes `&mut self` so
//! the borrow checker enforces that.

use std::sync::Arc;

use crate::config::QuestionsConfig;
use crate::document::{DocumentLoader, DocumentSource};
use crate::error::LoadError;

use super::pointer::SourcePointer;
use super::prompts;
use super::questions::parse_example_questions;
use super::responder::Responder;
use super::session::{Session, SessionSnapshot, SessionState, Turn};

/// Shown when the model produced no summary text
pub const NO_SUMMARY_PLACEHOLDER: &str = "No summary available.";

/// User actions fed in by the front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SubmitUrl(String),
    SubmitUpload { filename: String, bytes: Vec<u8> },
    AskQuestion(String),
    ClickSuggested(String),
    ClearChat,
    ResetSession,
}

/// Owns the session and applies events to it
pub struct SessionController {
    session: Session,
    state: SessionState,
    loader: Arc<dyn DocumentLoader>,
    responder: Responder,
    questions: QuestionsConfig,
    pointer: Option<SourcePointer>,
}

impl SessionController {
    pub fn new(loader: Arc<dyn DocumentLoader>, responder: Responder) -> Self {
        Self {
            session: Session::default(),
            state: SessionState::Empty,
            loader,
            responder,
            questions: QuestionsConfig::default(),
            pointer: None,
        }
    }

    /// Override suggested-question settings
    pub fn with_questions(mut self, questions: QuestionsConfig) -> Self {
        self.questions = questions;
        self
    }

    /// Record loaded URLs in `pointer`
    pub fn with_pointer(mut self, pointer: SourcePointer) -> Self {
        self.pointer = Some(pointer);
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn responder(&self) -> &Responder {
        &self.responder
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from_session(&self.session, self.state)
    }

    /// Apply one event and return the resulting snapshot.
    ///
    /// Only document loads can fail. After a failed load the session is
    /// EMPTY; a resubmission of the loaded identifier never reaches the
    /// loader.
    pub async fn handle(&mut self, event: SessionEvent) -> Result<SessionSnapshot, LoadError> {
        match event {
            SessionEvent::SubmitUrl(url) => self.submit(DocumentSource::Url(url)).await,
            SessionEvent::SubmitUpload { filename, bytes } => {
                self.submit(DocumentSource::Upload { filename, bytes }).await
            }
            SessionEvent::AskQuestion(text) => Ok(self.resolve_input(Some(text)).await),
            SessionEvent::ClickSuggested(question) => {
                self.session.pending_question = Some(question);
                Ok(self.resolve_input(None).await)
            }
            SessionEvent::ClearChat => {
                let cleared = self.session.chat_history.len();
                self.session.clear_chat();
                tracing::debug!(target: "mesh.chat.controller", turns = cleared, "chat cleared");
                Ok(self.snapshot())
            }
            SessionEvent::ResetSession => {
                self.reset();
                Ok(self.snapshot())
            }
        }
    }

    /// Resubmit the URL recorded by the source pointer, if any.
    pub async fn resume(&mut self) -> Option<Result<SessionSnapshot, LoadError>> {
        let url = self.pointer.as_ref()?.load()?;
        tracing::info!(target: "mesh.chat.controller", source = %url, "resuming recorded source");
        Some(self.handle(SessionEvent::SubmitUrl(url)).await)
    }

    /// One input-resolution step.
    ///
    /// Free text wins over a pending suggested question; the pending
    /// question is cleared either way. Blank free text counts as absent.
    /// Nothing is asked while no document is loaded.
    pub async fn resolve_input(&mut self, free_text: Option<String>) -> SessionSnapshot {
        let pending = self.session.take_pending();
        let question = free_text.filter(|t| !t.trim().is_empty()).or(pending);

        let Some(question) = question else {
            return self.snapshot();
        };

        if self.state != SessionState::Ready {
            tracing::debug!(
                target: "mesh.chat.controller",
                state = %self.state,
                "question ignored, no document loaded"
            );
            return self.snapshot();
        }

        let prompt = prompts::chat_prompt(
            &self.session.document_text,
            &self.session.chat_history,
            &question,
        );
        self.session.chat_history.push(Turn::user(question));

        let reply = self.responder.complete(&prompt).await;
        self.session.chat_history.push(Turn::assistant(reply));

        tracing::info!(
            target: "mesh.chat.controller",
            turns = self.session.chat_history.len(),
            "question answered"
        );
        self.snapshot()
    }

    async fn submit(&mut self, source: DocumentSource) -> Result<SessionSnapshot, LoadError> {
        let identifier = source.identifier().to_string();

        if self.state == SessionState::Ready && self.session.is_current(&identifier) {
            tracing::debug!(
                target: "mesh.chat.controller",
                source = %identifier,
                "source already loaded"
            );
            return Ok(self.snapshot());
        }

        // Rejected before LOADING: the current session stays as it is.
        if let Err(e) = source.format() {
            tracing::debug!(
                target: "mesh.chat.controller",
                source = %identifier,
                "unsupported source rejected"
            );
            return Err(e);
        }

        self.state = SessionState::Loading;
        tracing::info!(target: "mesh.chat.controller", source = %identifier, "loading document");

        let loaded = match self.loader.load(&source).await {
            Ok(text) if text.trim().is_empty() => Err(LoadError::EmptyExtraction),
            other => other,
        };
        let text = match loaded {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    target: "mesh.chat.controller",
                    source = %identifier,
                    error = %e,
                    "document load failed"
                );
                self.reset();
                return Err(e);
            }
        };

        self.session = Session::loaded(identifier.clone(), text);

        let summary = self
            .responder
            .complete(&prompts::summary_prompt(&self.session.document_text))
            .await;
        self.session.summary = if summary.trim().is_empty() {
            NO_SUMMARY_PLACEHOLDER.to_string()
        } else {
            summary
        };

        let raw_questions = self
            .responder
            .complete(&prompts::questions_prompt(
                &self.session.document_text,
                self.questions.count,
                self.questions.excerpt_chars,
            ))
            .await;
        self.session.example_questions = parse_example_questions(&raw_questions);

        self.state = SessionState::Ready;

        if let (DocumentSource::Url(url), Some(pointer)) = (&source, &self.pointer) {
            if let Err(e) = pointer.save(url) {
                tracing::warn!(target: "mesh.chat.controller", error = %e, "could not record source");
            }
        }

        tracing::info!(
            target: "mesh.chat.controller",
            source = %identifier,
            chars = self.session.document_text.chars().count(),
            questions = self.session.example_questions.len(),
            "document ready"
        );
        Ok(self.snapshot())
    }

    fn reset(&mut self) {
        self.session.reset();
        self.state = SessionState::Empty;
        if let Some(pointer) = &self.pointer {
            if let Err(e) = pointer.clear() {
                tracing::warn!(target: "mesh.chat.controller", error = %e, "could not clear source");
            }
        }
        tracing::debug!(target: "mesh.chat.controller", "session reset");
    }
}
