// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::io::{self, Write};

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use mesh_ai::chat::{Responder, SessionSnapshot, SessionState, TurnRole};
use mesh_ai::error::Result;

/// Print a line in the given color
pub(super) fn print_colored(color: Color, text: &str) -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(color))?;
    println!("{}", text);
    stdout.execute(ResetColor)?;
    Ok(())
}

/// Print welcome message
pub(super) fn print_welcome(responder: &Responder) -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(Color::Cyan))?;
    println!("mesh-ai v{}", env!("CARGO_PKG_VERSION"));
    stdout.execute(ResetColor)?;
    println!("Chat with your documents");

    if responder.is_available() {
        println!("Model: {}", responder.model());
    } else {
        print_colored(
            Color::Yellow,
            "⚠ AI model not available. Set GEMINI_API_KEY (or configure a provider) to enable answers.",
        )?;
    }
    println!("Load a document with /url <url> or /upload <path>. Type /help for commands, exit to quit\n");
    Ok(())
}

/// Print help message
pub(super) fn print_help() -> Result<()> {
    println!("\nCommands:");
    println!("  /url <url>      - Load a .pdf or .docx from a public URL");
    println!("  /upload <path>  - Load a local .pdf or .docx file");
    println!("  /summary        - Show the document summary");
    println!("  /questions      - Show suggested questions");
    println!("  /q <n>          - Ask suggested question number n");
    println!("  /clear          - Clear the chat history");
    println!("  /new            - Analyze a new document (discard this session)");
    println!("  /help           - Show this help message");
    println!("  exit            - Exit mesh-ai");
    println!("\nAnything else is sent as a question about the loaded document.");
    println!();
    Ok(())
}

/// Read user input; `None` on end of input
pub(super) fn read_user_input() -> Result<Option<String>> {
    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(Color::Green))?;
    print!("you: ");
    stdout.execute(ResetColor)?;
    stdout.flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Print an error message in red
pub(super) fn print_error(message: &str) -> Result<()> {
    let mut stderr = io::stderr();
    stderr.execute(SetForegroundColor(Color::Red))?;
    eprintln!("{}", message);
    stderr.execute(ResetColor)?;
    Ok(())
}

/// Print a progress note while a document or answer is being produced
pub(super) fn print_status(message: &str) -> Result<()> {
    print_colored(Color::DarkGrey, message)
}

/// Print the summary section of a loaded document
pub(super) fn print_summary(snapshot: &SessionSnapshot) -> Result<()> {
    if let Some(source) = &snapshot.source_id {
        print_colored(Color::Cyan, &format!("\n📄 {}", source))?;
    }
    print_colored(Color::Cyan, "\nDocument Summary")?;
    println!("{}\n", snapshot.summary);
    Ok(())
}

/// Print suggested questions, numbered from 1, capped at `limit`
pub(super) fn print_questions(snapshot: &SessionSnapshot, limit: usize) -> Result<()> {
    if snapshot.example_questions.is_empty() {
        return Ok(());
    }
    print_colored(Color::Cyan, "Suggested Questions")?;
    for (i, question) in snapshot.example_questions.iter().take(limit).enumerate() {
        println!("  {}. {}", i + 1, question);
    }
    println!("Use /q <n> to ask one.\n");
    Ok(())
}

/// Print the assistant's most recent reply
pub(super) fn print_reply(snapshot: &SessionSnapshot) -> Result<()> {
    let Some(reply) = snapshot.last_reply() else {
        return Ok(());
    };
    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(Color::Cyan))?;
    print!("\nmesh-ai: ");
    stdout.execute(ResetColor)?;
    println!("{}\n", reply);
    Ok(())
}

/// Print the whole conversation, used after resuming
pub(super) fn print_history(snapshot: &SessionSnapshot) -> Result<()> {
    for turn in &snapshot.chat_history {
        let (label, color) = match turn.role {
            TurnRole::User => ("you", Color::Green),
            TurnRole::Assistant => ("mesh-ai", Color::Cyan),
        };
        let mut stdout = io::stdout();
        stdout.execute(SetForegroundColor(color))?;
        print!("{}: ", label);
        stdout.execute(ResetColor)?;
        println!("{}", turn.content);
    }
    Ok(())
}

/// Hint shown when a question arrives before any document
pub(super) fn print_not_ready(snapshot: &SessionSnapshot) -> Result<()> {
    if snapshot.state != SessionState::Ready {
        print_colored(
            Color::Yellow,
            "No document loaded. Use /url <url> or /upload <path> first.",
        )?;
    }
    Ok(())
}
