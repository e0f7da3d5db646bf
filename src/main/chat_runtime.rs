// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::Path;

use mesh_ai::chat::input_parser::{parse_input, suggestion_at, ChatInput};
use mesh_ai::chat::{
    SessionController, SessionEvent, SessionSnapshot, SessionState, SourcePointer,
};
use mesh_ai::cli::ChatArgs;
use mesh_ai::config::Settings;
use mesh_ai::error::{LoadError, Result};

use crate::chat_ui::{
    print_error, print_help, print_history, print_not_ready, print_questions, print_reply,
    print_status, print_summary, print_welcome, read_user_input,
};
use crate::cli_commands::{build_controller, source_event, upload_event};

/// Run the interactive chat loop
pub(super) async fn run_chat(args: ChatArgs, settings: Settings) -> Result<()> {
    let question_limit = settings.questions.count;
    let mut controller =
        build_controller(&settings, &args.model)?.with_pointer(SourcePointer::default());

    print_welcome(controller.responder())?;

    if args.resume {
        match controller.resume().await {
            Some(outcome) => show_load(outcome, question_limit)?,
            None => print_status("No previous document to resume.")?,
        }
    }

    if let Some(event) = source_event(&args.source)? {
        submit(&mut controller, event, question_limit).await?;
    }

    loop {
        let Some(line) = read_user_input()? else {
            break;
        };

        match parse_input(&line) {
            ChatInput::Empty => continue,
            ChatInput::Exit => break,
            ChatInput::Help => print_help()?,
            ChatInput::Url(url) => {
                submit(&mut controller, SessionEvent::SubmitUrl(url), question_limit).await?
            }
            ChatInput::Upload(path) => match upload_event(Path::new(&path)) {
                Ok(event) => submit(&mut controller, event, question_limit).await?,
                Err(e) => print_error(&e.to_string())?,
            },
            ChatInput::ShowSummary => {
                let snapshot = controller.snapshot();
                print_not_ready(&snapshot)?;
                if snapshot.source_id.is_some() {
                    print_summary(&snapshot)?;
                }
            }
            ChatInput::ShowQuestions => {
                let snapshot = controller.snapshot();
                print_not_ready(&snapshot)?;
                if snapshot.example_questions.is_empty() && snapshot.source_id.is_some() {
                    print_status("No suggested questions for this document.")?;
                }
                print_questions(&snapshot, question_limit)?;
            }
            ChatInput::Suggested(n) => {
                let snapshot = controller.snapshot();
                let limited: Vec<String> = snapshot
                    .example_questions
                    .iter()
                    .take(question_limit)
                    .cloned()
                    .collect();
                match suggestion_at(&limited, n) {
                    Some(question) => {
                        let event = SessionEvent::ClickSuggested(question.to_string());
                        ask(&mut controller, event).await?;
                    }
                    None => print_error(&format!("No suggested question #{}", n))?,
                }
            }
            ChatInput::Clear => {
                controller.handle(SessionEvent::ClearChat).await?;
                print_status("Chat cleared.")?;
            }
            ChatInput::New => {
                controller.handle(SessionEvent::ResetSession).await?;
                print_status("Session reset. Load a new document with /url or /upload.")?;
            }
            ChatInput::Invalid(message) => print_error(&message)?,
            ChatInput::Question(question) => {
                ask(&mut controller, SessionEvent::AskQuestion(question)).await?
            }
        }
    }

    Ok(())
}

async fn submit(
    controller: &mut SessionController,
    event: SessionEvent,
    question_limit: usize,
) -> Result<()> {
    print_status("Processing document...")?;
    let outcome = controller.handle(event).await;
    show_load(outcome, question_limit)
}

/// Render the outcome of a load; load errors are shown, not raised
fn show_load(
    outcome: std::result::Result<SessionSnapshot, LoadError>,
    question_limit: usize,
) -> Result<()> {
    match outcome {
        Ok(snapshot) => {
            print_summary(&snapshot)?;
            print_questions(&snapshot, question_limit)?;
            print_history(&snapshot)
        }
        Err(e) => print_error(&e.to_string()),
    }
}

async fn ask(controller: &mut SessionController, event: SessionEvent) -> Result<()> {
    let before = controller.session().chat_history.len();
    if controller.state() == SessionState::Ready {
        print_status("Thinking...")?;
    }
    let snapshot = controller.handle(event).await?;
    if snapshot.chat_history.len() == before {
        return print_not_ready(&snapshot);
    }
    print_reply(&snapshot)
}
