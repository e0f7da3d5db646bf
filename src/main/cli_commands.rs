// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::Path;
use std::sync::Arc;

use mesh_ai::chat::{Responder, SessionController, SessionEvent, SessionSnapshot};
use mesh_ai::cli::{
    AskArgs, ModelArgs, OutputFormat, SettingsArgs, SettingsCommands, SourceArgs, SummarizeArgs,
};
use mesh_ai::config::Settings;
use mesh_ai::document::HttpDocumentLoader;
use mesh_ai::error::{MeshError, Result};

use crate::chat_ui::{print_error, print_questions, print_reply, print_status, print_summary};

/// Build a controller wired to the HTTP loader and the configured model
pub(super) fn build_controller(settings: &Settings, model: &ModelArgs) -> Result<SessionController> {
    let loader = HttpDocumentLoader::new(&settings.loader)?;
    let responder = Responder::from_settings(
        settings,
        model.provider.as_deref(),
        model.model.as_deref(),
    );
    Ok(SessionController::new(Arc::new(loader), responder)
        .with_questions(settings.questions.clone()))
}

/// Turn `--url` / `--file` into a load event
pub(super) fn source_event(source: &SourceArgs) -> Result<Option<SessionEvent>> {
    if let Some(url) = &source.url {
        return Ok(Some(SessionEvent::SubmitUrl(url.trim().to_string())));
    }
    match &source.file {
        Some(path) => upload_event(path).map(Some),
        None => Ok(None),
    }
}

/// Read a local file into an upload event named by its file name
pub(super) fn upload_event(path: &Path) -> Result<SessionEvent> {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| MeshError::InvalidInput(format!("Not a file: {}", path.display())))?
        .to_string();
    let bytes = std::fs::read(path)?;
    Ok(SessionEvent::SubmitUpload { filename, bytes })
}

fn require_source(source: &SourceArgs) -> Result<SessionEvent> {
    source_event(source)?
        .ok_or_else(|| MeshError::InvalidInput("Provide --url <url> or --file <path>".to_string()))
}

/// Load the document, reporting failures the way the chat does
async fn load(controller: &mut SessionController, event: SessionEvent) -> Result<SessionSnapshot> {
    print_status("Processing document...")?;
    match controller.handle(event).await {
        Ok(snapshot) => Ok(snapshot),
        Err(e) => {
            print_error(&e.to_string())?;
            Err(e.into())
        }
    }
}

fn print_json(snapshot: &SessionSnapshot) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(snapshot)?);
    Ok(())
}

/// Run the summarize command
pub(super) async fn run_summarize(
    args: SummarizeArgs,
    settings: Settings,
    format: OutputFormat,
) -> Result<()> {
    let event = require_source(&args.source)?;
    let mut controller = build_controller(&settings, &args.model)?;
    let snapshot = load(&mut controller, event).await?;

    match format {
        OutputFormat::Json => print_json(&snapshot),
        OutputFormat::Text => {
            print_summary(&snapshot)?;
            print_questions(&snapshot, settings.questions.count)
        }
    }
}

/// Run the ask command
pub(super) async fn run_ask(args: AskArgs, settings: Settings, format: OutputFormat) -> Result<()> {
    let event = require_source(&args.source)?;
    let mut controller = build_controller(&settings, &args.model)?;
    load(&mut controller, event).await?;

    let snapshot = controller
        .handle(SessionEvent::AskQuestion(args.question))
        .await?;

    match format {
        OutputFormat::Json => print_json(&snapshot),
        OutputFormat::Text => print_reply(&snapshot),
    }
}

/// Run settings subcommands
pub(super) fn run_settings_command(
    args: SettingsArgs,
    settings: Settings,
    path: &Path,
) -> Result<()> {
    match args.command.unwrap_or(SettingsCommands::Show) {
        SettingsCommands::Show => {
            let json = serde_json::to_string_pretty(&settings.redacted())?;
            println!("{}", json);
        }
        SettingsCommands::Path => {
            println!("{}", path.display());
        }
        SettingsCommands::Init { force } => {
            if path.exists() && !force {
                println!(
                    "Settings already exist at {} (use --force to overwrite).",
                    path.display()
                );
                return Ok(());
            }
            if force && path.exists() {
                std::fs::remove_file(path)?;
            }
            Settings::default().save_to(path)?;
            println!("Wrote default settings to {}", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_source_event_url_is_trimmed() {
        let source = SourceArgs {
            url: Some("  https://x.test/a.pdf ".to_string()),
            file: None,
        };
        assert_eq!(
            source_event(&source).unwrap(),
            Some(SessionEvent::SubmitUrl("https://x.test/a.pdf".to_string()))
        );
    }

    #[test]
    fn test_source_event_none() {
        assert!(source_event(&SourceArgs::default()).unwrap().is_none());
        assert!(require_source(&SourceArgs::default()).is_err());
    }

    #[test]
    fn test_upload_event_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Report.PDF");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        match upload_event(&path).unwrap() {
            SessionEvent::SubmitUpload { filename, bytes } => {
                assert_eq!(filename, "Report.PDF");
                assert_eq!(bytes, b"%PDF-1.4");
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_upload_event_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            upload_event(&dir.path().join("missing.pdf")),
            Err(MeshError::Io(_))
        ));
    }

    #[test]
    fn test_settings_init_and_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let args = SettingsArgs {
            command: Some(SettingsCommands::Init { force: false }),
        };
        run_settings_command(args, Settings::default(), &path).unwrap();
        assert!(path.exists());

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.questions.count, 3);
    }
}
