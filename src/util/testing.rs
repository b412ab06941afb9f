// src/util/testing.rs

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashSet;
use std::env;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{AiApi, NoteApi};
use crate::domain::{AiTool, DomainError, Note, NoteDraft, NoteId};

/// Backend operations the mock can record or fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockOperation {
    List,
    Get,
    Create,
    Update,
    Delete,
    Search,
}

struct MockState {
    notes: Vec<Note>,
    next_id: u64,
    clock: DateTime<Utc>,
    calls: Vec<MockOperation>,
}

impl MockState {
    /// Every call moves the clock one minute forward, so timestamps issued
    /// by the mock are strictly increasing.
    fn tick(&mut self) -> DateTime<Utc> {
        self.clock += Duration::minutes(1);
        self.clock
    }

    fn insert(&mut self, draft: &NoteDraft) -> Note {
        let id = NoteId::from(self.next_id);
        self.next_id += 1;
        self.insert_as(id, draft)
    }

    fn insert_as(&mut self, id: NoteId, draft: &NoteDraft) -> Note {
        let now = self.tick();
        let note = Note {
            id,
            title: draft.title.clone(),
            content: draft.content.clone(),
            created_at: now,
            updated_at: now,
        };
        self.notes.push(note.clone());
        note
    }
}

/// In-memory stand-in for the notes backend.
///
/// Behaves like the real service: assigns ids and timestamps, refreshes
/// `updated_at` on update, matches searches case-insensitively on title or
/// content, and fails `get`/`update`/`delete` for unknown ids.
///
/// # Examples
///
/// ```
/// use ainotes::util::testing::{MockNoteApi, MockOperation};
///
/// let api = MockNoteApi::builder()
///     .with_note("Groceries", "milk, eggs")
///     .with_failure(MockOperation::Search)
///     .build();
/// assert!(api.calls().is_empty());
/// ```
pub struct MockNoteApi {
    state: Mutex<MockState>,
    failures: HashSet<MockOperation>,
}

impl MockNoteApi {
    pub fn builder() -> MockNoteApiBuilder {
        MockNoteApiBuilder::new()
    }

    /// Operations issued against the mock, in order.
    pub fn calls(&self) -> Vec<MockOperation> {
        self.lock().calls.clone()
    }

    pub fn notes(&self) -> Vec<Note> {
        self.lock().notes.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self, operation: MockOperation, name: &'static str) -> Result<MutexGuard<'_, MockState>, DomainError> {
        let mut state = self.lock();
        state.calls.push(operation);
        if self.failures.contains(&operation) {
            return Err(DomainError::request_failed(name, "status 500 Internal Server Error"));
        }
        Ok(state)
    }
}

fn not_found(name: &'static str, id: &NoteId) -> DomainError {
    DomainError::request_failed(name, format!("status 404 Not Found for note {id}"))
}

#[async_trait]
impl NoteApi for MockNoteApi {
    async fn list_notes(&self) -> Result<Vec<Note>, DomainError> {
        let state = self.begin(MockOperation::List, "list notes")?;
        Ok(state.notes.clone())
    }

    async fn get_note(&self, id: &NoteId) -> Result<Note, DomainError> {
        let state = self.begin(MockOperation::Get, "get note")?;
        state
            .notes
            .iter()
            .find(|n| &n.id == id)
            .cloned()
            .ok_or_else(|| not_found("get note", id))
    }

    async fn create_note(&self, draft: &NoteDraft) -> Result<Note, DomainError> {
        let mut state = self.begin(MockOperation::Create, "create note")?;
        Ok(state.insert(draft))
    }

    async fn update_note(&self, id: &NoteId, draft: &NoteDraft) -> Result<Note, DomainError> {
        let mut state = self.begin(MockOperation::Update, "update note")?;
        let now = state.tick();
        let note = state
            .notes
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or_else(|| not_found("update note", id))?;
        note.title = draft.title.clone();
        note.content = draft.content.clone();
        note.updated_at = now;
        Ok(note.clone())
    }

    async fn delete_note(&self, id: &NoteId) -> Result<(), DomainError> {
        let mut state = self.begin(MockOperation::Delete, "delete note")?;
        let before = state.notes.len();
        state.notes.retain(|n| &n.id != id);
        if state.notes.len() == before {
            return Err(not_found("delete note", id));
        }
        Ok(())
    }

    async fn search_notes(&self, query: &str) -> Result<Vec<Note>, DomainError> {
        let state = self.begin(MockOperation::Search, "search notes")?;
        let needle = query.to_lowercase();
        Ok(state
            .notes
            .iter()
            .filter(|n| {
                n.title.to_lowercase().contains(&needle) || n.content.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }
}

/// Builder for MockNoteApi
pub struct MockNoteApiBuilder {
    drafts: Vec<(Option<NoteId>, NoteDraft)>,
    failures: HashSet<MockOperation>,
}

impl MockNoteApiBuilder {
    pub fn new() -> Self {
        Self {
            drafts: vec![],
            failures: HashSet::new(),
        }
    }

    /// Seed a note; ids are assigned from 1 in insertion order.
    pub fn with_note(mut self, title: &str, content: &str) -> Self {
        self.drafts.push((None, NoteDraft::new(title, content)));
        self
    }

    /// Seed a note under a caller-chosen id, e.g. a non-numeric one.
    pub fn with_note_id(mut self, id: &str, title: &str, content: &str) -> Self {
        let id = NoteId::parse(id).unwrap_or_else(|_| NoteId::from(0));
        self.drafts.push((Some(id), NoteDraft::new(title, content)));
        self
    }

    /// Make every call of `operation` fail like a 5xx response.
    pub fn with_failure(mut self, operation: MockOperation) -> Self {
        self.failures.insert(operation);
        self
    }

    pub fn build(self) -> MockNoteApi {
        let mut state = MockState {
            notes: vec![],
            next_id: 1,
            clock: Utc
                .with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
                .single()
                .unwrap_or_default(),
            calls: vec![],
        };
        for (id, draft) in &self.drafts {
            match id {
                Some(id) => state.insert_as(id.clone(), draft),
                None => state.insert(draft),
            };
        }
        MockNoteApi {
            state: Mutex::new(state),
            failures: self.failures,
        }
    }
}

impl Default for MockNoteApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Records which tool endpoint was hit and echoes the input.
#[derive(Default)]
pub struct MockAiApi {
    calls: Mutex<Vec<(AiTool, String)>>,
    failing: bool,
}

impl MockAiApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(vec![]),
            failing: true,
        }
    }

    pub fn calls(&self) -> Vec<(AiTool, String)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn respond(&self, tool: AiTool, text: &str) -> Result<String, DomainError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((tool, text.to_string()));
        if self.failing {
            return Err(DomainError::request_failed("call AI tool", "status 503 Service Unavailable"));
        }
        Ok(format!("{tool}: {text}"))
    }
}

#[async_trait]
impl AiApi for MockAiApi {
    async fn summarize_text(&self, text: &str) -> Result<String, DomainError> {
        self.respond(AiTool::Summarize, text)
    }

    async fn generate_ideas(&self, topic: &str) -> Result<String, DomainError> {
        self.respond(AiTool::Ideas, topic)
    }

    async fn improve_text(&self, text: &str) -> Result<String, DomainError> {
        self.respond(AiTool::Improve, text)
    }

    async fn answer_question(&self, question: &str) -> Result<String, DomainError> {
        self.respond(AiTool::Answer, question)
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "mio", "wiremock", "h2"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[ctor::ctor]
    fn init() {
        init_test_setup().expect("Failed to initialize test setup");
    }

    #[tokio::test]
    async fn given_valid_draft_when_creating_then_get_returns_submitted_values_and_issued_id() {
        let api = MockNoteApi::builder().build();

        let created = api
            .create_note(&NoteDraft::new("Groceries", "milk, eggs"))
            .await
            .unwrap();
        let fetched = api.get_note(&created.id).await.unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.title, "Groceries");
        assert_eq!(fetched.content, "milk, eggs");
    }

    #[tokio::test]
    async fn given_existing_note_when_updating_then_updated_at_strictly_increases() {
        let api = MockNoteApi::builder().with_note("Plan", "v1").build();
        let id = NoteId::parse("1").unwrap();
        let before = api.get_note(&id).await.unwrap();

        api.update_note(&id, &NoteDraft::new("Plan", "v2")).await.unwrap();
        let after = api.get_note(&id).await.unwrap();

        assert_eq!(after.content, "v2");
        assert!(after.updated_at > before.updated_at);
        assert_eq!(after.created_at, before.created_at);
    }

    #[tokio::test]
    async fn given_deleted_note_when_deleting_again_then_returns_error() {
        let api = MockNoteApi::builder().with_note("Gone", "").build();
        let id = NoteId::parse("1").unwrap();

        api.delete_note(&id).await.unwrap();
        let second = api.delete_note(&id).await;

        assert!(matches!(second, Err(DomainError::RequestFailed { .. })));
    }

    #[tokio::test]
    async fn given_empty_query_when_searching_then_matches_list() {
        let api = MockNoteApi::builder()
            .with_note("A", "x")
            .with_note("B", "y")
            .build();

        let listed = api.list_notes().await.unwrap();
        let searched = api.search_notes("").await.unwrap();

        assert_eq!(listed, searched);
    }

    #[tokio::test]
    async fn given_configured_failure_when_calling_then_fails_and_records_call() {
        let api = MockNoteApi::builder()
            .with_failure(MockOperation::List)
            .build();

        assert!(api.list_notes().await.is_err());
        assert_eq!(api.calls(), vec![MockOperation::List]);
    }

    #[tokio::test]
    async fn given_tool_when_processing_then_records_matching_endpoint() {
        let api = MockAiApi::new();

        let result = api.process(AiTool::Improve, "draft").await.unwrap();

        assert_eq!(result, "improve: draft");
        assert_eq!(api.calls(), vec![(AiTool::Improve, "draft".to_string())]);
    }
}
