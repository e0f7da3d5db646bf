// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Prompt templates sent to the AI responder

use super::session::Turn;

/// Prompt asking for a markdown summary of the whole document
pub fn summary_prompt(document_text: &str) -> String {
    format!(
        "Provide a concise summary of the following document. \
         Use markdown for clear formatting:\n\n---\n\n{}",
        document_text
    )
}

/// Prompt asking for `count` suggested questions as a JSON list of strings.
///
/// Only the first `excerpt_chars` characters of the document are embedded.
pub fn questions_prompt(document_text: &str, count: usize, excerpt_chars: usize) -> String {
    let excerpt = excerpt(document_text, excerpt_chars);
    format!(
        "Based on the following document text, generate exactly {} concise and insightful \
         questions that a user might ask.\n\
         Return the questions as a JSON-formatted list of strings. For example: \
         [\"What is the main topic?\", \"Who are the key people mentioned?\", \"What is the conclusion?\"]\n\n\
         DOCUMENT TEXT:\n---\n{}\n---\n",
        count, excerpt
    )
}

/// Prompt answering `question` from the document and the prior conversation.
///
/// `history` is the conversation before the question is appended.
pub fn chat_prompt(document_text: &str, history: &[Turn], question: &str) -> String {
    format!(
        "Based ONLY on the document text provided below, answer the user's question. \
         If the answer isn't in the document, state that clearly.\n\
         DOCUMENT TEXT: --- {} ---\n\
         CONVERSATION HISTORY: --- {} ---\n\
         USER'S QUESTION: {}",
        document_text,
        render_history(history),
        question
    )
}

/// Render turns as a JSON list of `{role, content}` entries
fn render_history(history: &[Turn]) -> String {
    serde_json::to_string(history).unwrap_or_else(|_| "[]".to_string())
}

/// First `max_chars` characters, never splitting a code point
fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
