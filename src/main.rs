// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! mesh-ai - chat with a PDF or DOCX document from your terminal
//!
//! Entry point for the mesh-ai CLI application.

use clap::Parser;

use mesh_ai::cli::{ChatArgs, Cli, Commands};
use mesh_ai::config::Settings;
use mesh_ai::error::Result;

#[path = "main/chat_runtime.rs"]
mod chat_runtime;
#[path = "main/chat_ui.rs"]
mod chat_ui;
#[path = "main/cli_commands.rs"]
mod cli_commands;

use chat_runtime::run_chat;
use cli_commands::{run_ask, run_settings_command, run_summarize};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // API keys may live in a local .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on the crate's own diagnostics; `RUST_LOG` still applies.
    if cli.verbose > 0 {
        let level = if cli.verbose > 1 { "trace" } else { "debug" };
        for target in ["mesh.chat.controller", "mesh.document.loader", "mesh.llm"] {
            if let Ok(parsed) = format!("{}={}", target, level).parse() {
                env_filter = env_filter.add_directive(parsed);
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Load settings
    let settings_path = cli.config.clone().unwrap_or_else(Settings::default_path);
    let settings = Settings::load_from(&settings_path)?;
    settings.validate()?;

    // Dispatch to appropriate command
    let format = cli.format;
    match cli.command {
        None => run_chat(ChatArgs::default(), settings).await,
        Some(Commands::Chat(args)) => run_chat(args, settings).await,
        Some(Commands::Ask(args)) => run_ask(args, settings, format).await,
        Some(Commands::Summarize(args)) => run_summarize(args, settings, format).await,
        Some(Commands::Settings(args)) => run_settings_command(args, settings, &settings_path),
    }
}
