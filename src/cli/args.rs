// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for mesh-ai.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// mesh-ai - chat with a PDF or DOCX document from your terminal
#[derive(Parser, Debug)]
#[command(name = "mesh-ai")]
#[command(version, about = "Chat with a PDF or DOCX document from your terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file path (defaults to ~/.mesh-ai/settings.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive document chat (default when no command given)
    Chat(ChatArgs),

    /// Load a document and answer a single question
    Ask(AskArgs),

    /// Load a document and print its summary and suggested questions
    Summarize(SummarizeArgs),

    /// Manage configuration
    #[command(alias = "config")]
    Settings(SettingsArgs),
}

/// Where to load the document from
#[derive(clap::Args, Debug, Default, Clone)]
#[group(multiple = false)]
pub struct SourceArgs {
    /// Public URL of a .pdf or .docx file
    #[arg(long)]
    pub url: Option<String>,

    /// Local .pdf or .docx file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

impl SourceArgs {
    /// Whether neither --url nor --file was given
    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.file.is_none()
    }
}

/// Model selection shared by every command that talks to the model
#[derive(clap::Args, Debug, Default, Clone)]
pub struct ModelArgs {
    /// Model to use
    #[arg(short, long)]
    pub model: Option<String>,

    /// LLM provider to use (gemini, openrouter)
    #[arg(short, long)]
    pub provider: Option<String>,
}

/// Arguments for the chat subcommand
#[derive(clap::Args, Debug, Default)]
pub struct ChatArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Reopen the last document loaded by URL
    #[arg(long)]
    pub resume: bool,

    #[command(flatten)]
    pub model: ModelArgs,
}

/// Arguments for the ask subcommand
#[derive(clap::Args, Debug)]
pub struct AskArgs {
    /// The question to ask about the document
    pub question: String,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub model: ModelArgs,
}

/// Arguments for the summarize subcommand
#[derive(clap::Args, Debug)]
pub struct SummarizeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub model: ModelArgs,
}

/// Arguments for settings/config
#[derive(clap::Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: Option<SettingsCommands>,
}

/// Settings subcommands
#[derive(Subcommand, Debug, PartialEq)]
pub enum SettingsCommands {
    /// Show current configuration (API keys redacted)
    Show,

    /// Print the settings file path
    Path,

    /// Write a settings file with defaults
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format for responses
#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_default_no_command() {
        let cli = Cli::parse_from(["mesh-ai"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_verbose_multiple() {
        let cli = Cli::parse_from(["mesh-ai", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_config_path() {
        let cli = Cli::parse_from(["mesh-ai", "--config", "/tmp/settings.json"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/settings.json")));
    }

    #[test]
    fn test_chat_with_url() {
        let cli = Cli::parse_from(["mesh-ai", "chat", "--url", "https://x.test/a.pdf"]);
        match cli.command {
            Some(Commands::Chat(args)) => {
                assert_eq!(args.source.url.as_deref(), Some("https://x.test/a.pdf"));
                assert!(args.source.file.is_none());
                assert!(!args.resume);
            }
            _ => panic!("Expected Chat command"),
        }
    }

    #[test]
    fn test_chat_resume_with_provider() {
        let cli = Cli::parse_from(["mesh-ai", "chat", "--resume", "-p", "openrouter", "-m", "x/y"]);
        match cli.command {
            Some(Commands::Chat(args)) => {
                assert!(args.resume);
                assert!(args.source.is_empty());
                assert_eq!(args.model.provider.as_deref(), Some("openrouter"));
                assert_eq!(args.model.model.as_deref(), Some("x/y"));
            }
            _ => panic!("Expected Chat command"),
        }
    }

    #[test]
    fn test_url_and_file_conflict() {
        let result = Cli::try_parse_from([
            "mesh-ai",
            "chat",
            "--url",
            "https://x.test/a.pdf",
            "--file",
            "a.pdf",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_ask_command() {
        let cli = Cli::parse_from(["mesh-ai", "ask", "--file", "report.docx", "Who wrote it?"]);
        match cli.command {
            Some(Commands::Ask(args)) => {
                assert_eq!(args.question, "Who wrote it?");
                assert_eq!(args.source.file, Some(PathBuf::from("report.docx")));
            }
            _ => panic!("Expected Ask command"),
        }
    }

    #[test]
    fn test_ask_requires_question() {
        assert!(Cli::try_parse_from(["mesh-ai", "ask", "--file", "a.pdf"]).is_err());
    }

    #[test]
    fn test_summarize_json() {
        let cli = Cli::parse_from([
            "mesh-ai",
            "summarize",
            "--url",
            "https://x.test/a.pdf",
            "--format",
            "json",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Some(Commands::Summarize(_))));
    }

    #[test]
    fn test_settings_subcommands() {
        let cli = Cli::parse_from(["mesh-ai", "settings", "init", "--force"]);
        match cli.command {
            Some(Commands::Settings(args)) => {
                assert_eq!(args.command, Some(SettingsCommands::Init { force: true }));
            }
            _ => panic!("Expected Settings command"),
        }

        let cli = Cli::parse_from(["mesh-ai", "config", "path"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Settings(SettingsArgs {
                command: Some(SettingsCommands::Path)
            }))
        ));
    }
}
