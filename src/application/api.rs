// src/application/api.rs
use crate::domain::{AiTool, DomainError, Note, NoteDraft, NoteId};
use async_trait::async_trait;

/// Backend boundary for the note resource.
#[async_trait]
pub trait NoteApi: Send + Sync {
    async fn list_notes(&self) -> Result<Vec<Note>, DomainError>;

    async fn get_note(&self, id: &NoteId) -> Result<Note, DomainError>;

    async fn create_note(&self, draft: &NoteDraft) -> Result<Note, DomainError>;

    /// Replaces title and content of an existing note.
    async fn update_note(&self, id: &NoteId, draft: &NoteDraft) -> Result<Note, DomainError>;

    async fn delete_note(&self, id: &NoteId) -> Result<(), DomainError>;

    async fn search_notes(&self, query: &str) -> Result<Vec<Note>, DomainError>;
}

/// Backend boundary for the AI text operations.
#[async_trait]
pub trait AiApi: Send + Sync {
    async fn summarize_text(&self, text: &str) -> Result<String, DomainError>;

    async fn generate_ideas(&self, topic: &str) -> Result<String, DomainError>;

    async fn improve_text(&self, text: &str) -> Result<String, DomainError>;

    async fn answer_question(&self, question: &str) -> Result<String, DomainError>;

    async fn process(&self, tool: AiTool, text: &str) -> Result<String, DomainError> {
        match tool {
            AiTool::Summarize => self.summarize_text(text).await,
            AiTool::Ideas => self.generate_ideas(text).await,
            AiTool::Improve => self.improve_text(text).await,
            AiTool::Answer => self.answer_question(text).await,
        }
    }
}

/// Asks the user before a destructive action.
pub trait Confirm: Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// A decision already taken elsewhere, e.g. a `--yes` flag or a submitted
/// confirmation form.
impl Confirm for bool {
    fn confirm(&self, _prompt: &str) -> bool {
        *self
    }
}
