// src/constants.rs
//
// Application-wide constants shared by the clients, views and presenters.

/// Backend origin used when neither `--backend` nor the config file set one.
pub const DEFAULT_BACKEND_ORIGIN: &str = "http://localhost:8080";

/// Address the web shell binds to by default.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Path segments of the note resource below the backend origin.
///
/// Used in: `infrastructure/note_client.rs`
pub const NOTES_BASE_PATH: &[&str] = &["api", "notes"];

/// Path segments of the AI endpoints below the backend origin.
///
/// Used in: `infrastructure/ai_client.rs`
pub const AI_BASE_PATH: &[&str] = &["api", "ai"];

/// Characters of note content shown on a list card before truncation.
pub const PREVIEW_CHAR_LIMIT: usize = 100;

/// Prompt shown before any note is deleted.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this note?";

/// Shown by the list view when there is nothing to display.
pub const EMPTY_LIST_MESSAGE: &str = "No notes found. Create your first note!";

/// Brand shown in the header, footer and page titles.
pub const APP_NAME: &str = "AI Demo App";

/// Delay in milliseconds after writing a preview file before the process
/// may exit and remove it.
///
/// The browser is launched asynchronously and has to open the file before
/// the temporary directory goes away.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
