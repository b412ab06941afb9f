// src/infrastructure/note_client.rs
use crate::application::NoteApi;
use crate::constants::NOTES_BASE_PATH;
use crate::domain::{DomainError, Note, NoteDraft, NoteId};
use crate::infrastructure::http::{endpoint, fetch_empty, fetch_json, parse_origin};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, instrument};

/// HTTP wrapper for `/api/notes`: one call per operation, JSON in and out.
#[derive(Debug, Clone)]
pub struct NoteClient {
    http: Client,
    origin: Url,
}

impl NoteClient {
    pub fn new(http: Client, origin: &str) -> Result<Self> {
        Ok(Self {
            http,
            origin: parse_origin(origin)?,
        })
    }

    fn url(&self, extra: &[&str]) -> Url {
        let segments: Vec<&str> = NOTES_BASE_PATH.iter().chain(extra).copied().collect();
        endpoint(&self.origin, &segments)
    }
}

#[async_trait]
impl NoteApi for NoteClient {
    #[instrument(level = "debug", skip(self))]
    async fn list_notes(&self) -> Result<Vec<Note>, DomainError> {
        fetch_json("list notes", self.http.get(self.url(&[]))).await
    }

    #[instrument(level = "debug", skip(self))]
    async fn get_note(&self, id: &NoteId) -> Result<Note, DomainError> {
        fetch_json("get note", self.http.get(self.url(&[id.as_str()]))).await
    }

    #[instrument(level = "debug", skip(self, draft), fields(title = %draft.title))]
    async fn create_note(&self, draft: &NoteDraft) -> Result<Note, DomainError> {
        fetch_json("create note", self.http.post(self.url(&[])).json(draft)).await
    }

    #[instrument(level = "debug", skip(self, draft))]
    async fn update_note(&self, id: &NoteId, draft: &NoteDraft) -> Result<Note, DomainError> {
        fetch_json(
            "update note",
            self.http.put(self.url(&[id.as_str()])).json(draft),
        )
        .await
    }

    #[instrument(level = "debug", skip(self))]
    async fn delete_note(&self, id: &NoteId) -> Result<(), DomainError> {
        fetch_empty("delete note", self.http.delete(self.url(&[id.as_str()]))).await
    }

    /// The query travels as an encoded `query` parameter, so reserved
    /// characters reach the backend verbatim.
    #[instrument(level = "debug", skip(self))]
    async fn search_notes(&self, query: &str) -> Result<Vec<Note>, DomainError> {
        let url = self.url(&["search"]);
        debug!(%url, "Searching notes");
        fetch_json(
            "search notes",
            self.http.get(url).query(&[("query", query)]),
        )
        .await
    }
}
