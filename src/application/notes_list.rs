// src/application/notes_list.rs
use crate::application::{Confirm, NoteApi, ViewState};
use crate::constants::DELETE_CONFIRMATION;
use crate::domain::{Note, NoteId};
use tracing::{debug, error, info, instrument};

pub const FETCH_FAILED: &str = "Failed to fetch notes. Please try again later.";
pub const SEARCH_FAILED: &str = "Failed to search notes. Please try again later.";
pub const DELETE_FAILED: &str = "Failed to delete note. Please try again later.";

/// The `/notes` view: all notes, or the result of the current search.
#[derive(Debug)]
pub struct NotesListView {
    query: String,
    state: ViewState<Vec<Note>>,
}

impl NotesListView {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState<Vec<Note>> {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    #[instrument(level = "debug", skip_all)]
    pub async fn refresh<A: NoteApi + ?Sized>(&mut self, api: &A) {
        self.state = ViewState::Loading;
        self.state = match api.list_notes().await {
            Ok(notes) => {
                debug!(count = notes.len(), "Fetched notes");
                ViewState::Ready(notes)
            }
            Err(err) => {
                error!(error = %err, "Error fetching notes");
                ViewState::failed(FETCH_FAILED)
            }
        };
    }

    /// Runs the current query; a blank query lists everything.
    #[instrument(level = "debug", skip_all, fields(query = %self.query))]
    pub async fn search<A: NoteApi + ?Sized>(&mut self, api: &A) {
        if self.query.trim().is_empty() {
            return self.refresh(api).await;
        }

        self.state = ViewState::Loading;
        self.state = match api.search_notes(&self.query).await {
            Ok(notes) => {
                debug!(count = notes.len(), "Search returned notes");
                ViewState::Ready(notes)
            }
            Err(err) => {
                error!(error = %err, "Error searching notes");
                ViewState::failed(SEARCH_FAILED)
            }
        };
    }

    pub async fn clear_search<A: NoteApi + ?Sized>(&mut self, api: &A) {
        self.query.clear();
        self.refresh(api).await;
    }

    /// Deletes after confirmation and drops the note from the list.
    ///
    /// Returns whether the note was deleted.
    #[instrument(level = "debug", skip(self, api, confirm))]
    pub async fn delete<A, C>(&mut self, api: &A, id: &NoteId, confirm: &C) -> bool
    where
        A: NoteApi + ?Sized,
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(DELETE_CONFIRMATION) {
            debug!("Delete declined");
            return false;
        }

        match api.delete_note(id).await {
            Ok(()) => {
                info!(note_id = %id, "Deleted note");
                if let ViewState::Ready(notes) = &mut self.state {
                    notes.retain(|note| &note.id != id);
                }
                true
            }
            Err(err) => {
                error!(error = %err, "Error deleting note");
                self.state = ViewState::failed(DELETE_FAILED);
                false
            }
        }
    }
}

impl Default for NotesListView {
    fn default() -> Self {
        Self::new()
    }
}
