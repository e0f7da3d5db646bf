// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Input parsing for the interactive chat
//!
//! Pure functions that classify a line typed at the prompt.

/// What a line of user input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatInput {
    /// Blank line
    Empty,
    /// Leave the chat
    Exit,
    Help,
    /// `/url <url>`
    Url(String),
    /// `/upload <path>`
    Upload(String),
    /// `/q <n>`, 1-based suggestion index
    Suggested(usize),
    ShowSummary,
    ShowQuestions,
    Clear,
    New,
    /// A slash command that is malformed or unknown
    Invalid(String),
    /// Anything else is a question about the document
    Question(String),
}

/// Classify one line of input.
pub fn parse_input(input: &str) -> ChatInput {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ChatInput::Empty;
    }
    if is_exit_command(trimmed) {
        return ChatInput::Exit;
    }
    if !trimmed.starts_with('/') {
        return ChatInput::Question(trimmed.to_string());
    }

    let (name, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (trimmed, ""),
    };

    match name.to_lowercase().as_str() {
        "/help" | "/?" => ChatInput::Help,
        "/summary" => ChatInput::ShowSummary,
        "/questions" => ChatInput::ShowQuestions,
        "/clear" => ChatInput::Clear,
        "/new" => ChatInput::New,
        "/url" if !arg.is_empty() => ChatInput::Url(arg.to_string()),
        "/url" => ChatInput::Invalid("Usage: /url <url>".to_string()),
        "/upload" if !arg.is_empty() => ChatInput::Upload(arg.to_string()),
        "/upload" => ChatInput::Invalid("Usage: /upload <path>".to_string()),
        "/q" => match arg.parse::<usize>() {
            Ok(n) if n >= 1 => ChatInput::Suggested(n),
            _ => ChatInput::Invalid("Usage: /q <number>".to_string()),
        },
        other => ChatInput::Invalid(format!("Unknown command: {}", other)),
    }
}

/// Check if user input is an exit command.
pub fn is_exit_command(input: &str) -> bool {
    let trimmed = input.trim().to_lowercase();
    matches!(trimmed.as_str(), "exit" | "quit" | "/exit" | "/quit")
}

/// Pick the n-th (1-based) suggested question.
pub fn suggestion_at(questions: &[String], n: usize) -> Option<&str> {
    n.checked_sub(1)
        .and_then(|i| questions.get(i))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_question() {
        assert_eq!(
            parse_input("  What is this about?  "),
            ChatInput::Question("What is this about?".to_string())
        );
    }

    #[test]
    fn test_empty_and_exit() {
        assert_eq!(parse_input("   "), ChatInput::Empty);
        assert_eq!(parse_input("exit"), ChatInput::Exit);
        assert_eq!(parse_input("QUIT"), ChatInput::Exit);
        assert_eq!(parse_input("/quit"), ChatInput::Exit);
    }

    #[test]
    fn test_url_and_upload() {
        assert_eq!(
            parse_input("/url https://x.test/a.pdf"),
            ChatInput::Url("https://x.test/a.pdf".to_string())
        );
        assert_eq!(
            parse_input("/upload ./docs/report.docx"),
            ChatInput::Upload("./docs/report.docx".to_string())
        );
        assert!(matches!(parse_input("/url"), ChatInput::Invalid(_)));
        assert!(matches!(parse_input("/upload   "), ChatInput::Invalid(_)));
    }

    #[test]
    fn test_suggested_index() {
        assert_eq!(parse_input("/q 2"), ChatInput::Suggested(2));
        assert!(matches!(parse_input("/q 0"), ChatInput::Invalid(_)));
        assert!(matches!(parse_input("/q two"), ChatInput::Invalid(_)));
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse_input("/help"), ChatInput::Help);
        assert_eq!(parse_input("/SUMMARY"), ChatInput::ShowSummary);
        assert_eq!(parse_input("/questions"), ChatInput::ShowQuestions);
        assert_eq!(parse_input("/clear"), ChatInput::Clear);
        assert_eq!(parse_input("/new"), ChatInput::New);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_input("/frobnicate"),
            ChatInput::Invalid("Unknown command: /frobnicate".to_string())
        );
    }

    #[test]
    fn test_suggestion_at() {
        let questions = vec!["A?".to_string(), "B?".to_string()];
        assert_eq!(suggestion_at(&questions, 1), Some("A?"));
        assert_eq!(suggestion_at(&questions, 2), Some("B?"));
        assert_eq!(suggestion_at(&questions, 3), None);
        assert_eq!(suggestion_at(&questions, 0), None);
    }
}
