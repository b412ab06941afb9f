// src/domain/mod.rs
pub mod ai;
pub mod error;
pub mod note;

pub use ai::{AiRequest, AiResponse, AiTool};
pub use error::DomainError;
pub use note::{Note, NoteDraft, NoteId};
