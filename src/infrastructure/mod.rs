// src/infrastructure/mod.rs
pub mod ai_client;
pub mod config;
pub mod http;
pub mod note_client;
pub mod prompt;
pub mod renderer;

pub use ai_client::AiClient;
pub use config::Config;
pub use note_client::NoteClient;
pub use prompt::StdinConfirm;
pub use renderer::PagePreview;
