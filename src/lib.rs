// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod shell;
pub mod util;

use crate::application::Confirm;
use crate::cli::args::{Args, Command};
use crate::cli::commands;
use crate::infrastructure::{AiClient, Config, NoteClient, PagePreview, StdinConfirm};
use crate::shell::Shell;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting ainotes with arguments");

    // Initialize infrastructure
    let config = Config::resolve(args.config.as_deref())?;
    let origin = args.backend.as_deref().unwrap_or(&config.backend.origin);
    info!(%origin, "Using backend");

    let http = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;
    let notes = Arc::new(NoteClient::new(http.clone(), origin)?);
    let ai = Arc::new(AiClient::new(http, origin)?);

    let mut out = std::io::stdout().lock();

    // Execute use case
    match args.command {
        Command::List { json } => commands::list(notes.as_ref(), json, &mut out).await,
        Command::Search { query, json } => {
            commands::search(notes.as_ref(), &query, json, &mut out).await
        }
        Command::View { note_id, json } => {
            commands::view(notes.as_ref(), &note_id, json, &mut out).await
        }
        Command::Create { title, content } => {
            commands::create(notes.as_ref(), &title, &content, &mut out).await
        }
        Command::Edit {
            note_id,
            title,
            content,
        } => {
            commands::edit(
                notes.as_ref(),
                &note_id,
                title.as_deref(),
                content.as_deref(),
                &mut out,
            )
            .await
        }
        Command::Delete { note_id, yes } => {
            let confirm: &dyn Confirm = if yes { &true } else { &StdinConfirm };
            commands::delete(notes.as_ref(), &note_id, confirm, &mut out).await
        }
        Command::Ai { tool, text } => commands::ai(ai.as_ref(), tool, &text, &mut out).await,
        Command::Open { route } => {
            let shell = Shell::new(notes, ai);
            let mut preview = PagePreview::new();
            let path = commands::open(&shell, &route, &mut preview).await?;
            debug!(path = %path.display(), "Opened page");
            Ok(())
        }
        Command::Serve { bind } => {
            let bind = bind.unwrap_or(config.server.bind.clone());
            shell::server::serve(Shell::new(notes, ai), &bind).await
        }
    }
}

#[cfg(test)]
/// must be public to be used from integration tests
mod tests {
    use crate::util::testing;
    #[ctor::ctor]
    fn init() {
        testing::init_test_setup().expect("Failed to initialize test setup");
    }
}
