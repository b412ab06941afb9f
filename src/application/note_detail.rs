// src/application/note_detail.rs
use crate::application::{Confirm, NoteApi, Route, ViewState};
use crate::constants::DELETE_CONFIRMATION;
use crate::domain::{Note, NoteId};
use tracing::{debug, error, info, instrument};

pub const FETCH_FAILED: &str = "Failed to fetch note. It may have been deleted or does not exist.";
pub const DELETE_FAILED: &str = "Failed to delete note. Please try again later.";

/// The `/notes/{id}` view.
#[derive(Debug)]
pub struct NoteDetailView {
    id: NoteId,
    state: ViewState<Note>,
}

impl NoteDetailView {
    pub fn new(id: NoteId) -> Self {
        Self {
            id,
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState<Note> {
        &self.state
    }

    #[instrument(level = "debug", skip_all, fields(note_id = %self.id))]
    pub async fn load<A: NoteApi + ?Sized>(&mut self, api: &A) {
        self.state = ViewState::Loading;
        self.state = match api.get_note(&self.id).await {
            Ok(note) => ViewState::Ready(note),
            Err(err) => {
                error!(error = %err, "Error fetching note");
                ViewState::failed(FETCH_FAILED)
            }
        };
    }

    /// Deletes the note after confirmation; on success the caller should
    /// navigate to the returned route.
    #[instrument(level = "debug", skip_all, fields(note_id = %self.id))]
    pub async fn delete<A, C>(&mut self, api: &A, confirm: &C) -> Option<Route>
    where
        A: NoteApi + ?Sized,
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(DELETE_CONFIRMATION) {
            debug!("Delete declined");
            return None;
        }

        match api.delete_note(&self.id).await {
            Ok(()) => {
                info!(note_id = %self.id, "Deleted note");
                Some(Route::NotesList)
            }
            Err(err) => {
                error!(error = %err, "Error deleting note");
                self.state = ViewState::failed(DELETE_FAILED);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{MockNoteApi, MockOperation};

    #[tokio::test]
    async fn given_existing_note_when_loading_then_ready() {
        // Arrange
        let api = MockNoteApi::builder().with_note("Question", "Answer").build();
        let mut view = NoteDetailView::new(NoteId::from(1));

        // Act
        view.load(&api).await;

        // Assert
        let note = view.state().data().expect("note should be loaded");
        assert_eq!(note.title, "Question");
        assert_eq!(note.content, "Answer");
    }

    #[tokio::test]
    async fn given_nonexistent_note_when_loading_then_failed() {
        let api = MockNoteApi::builder().build();
        let mut view = NoteDetailView::new(NoteId::from(999));

        view.load(&api).await;

        assert_eq!(view.state().error(), Some(FETCH_FAILED));
    }

    #[tokio::test]
    async fn given_declined_confirmation_when_deleting_then_stays_and_sends_nothing() {
        let api = MockNoteApi::builder().with_note("Keep", "").build();
        let mut view = NoteDetailView::new(NoteId::from(1));
        view.load(&api).await;

        let navigation = view.delete(&api, &false).await;

        assert_eq!(navigation, None);
        assert_eq!(api.calls(), vec![MockOperation::Get]);
        assert!(view.state().data().is_some());
    }

    #[tokio::test]
    async fn given_confirmation_when_deleting_then_navigates_to_list() {
        let api = MockNoteApi::builder().with_note("Drop", "").build();
        let mut view = NoteDetailView::new(NoteId::from(1));
        view.load(&api).await;

        let navigation = view.delete(&api, &true).await;

        assert_eq!(navigation, Some(Route::NotesList));
        assert!(api.notes().is_empty());
    }

    #[tokio::test]
    async fn given_delete_failure_when_deleting_then_failed_with_delete_message() {
        let api = MockNoteApi::builder()
            .with_note("Sticky", "")
            .with_failure(MockOperation::Delete)
            .build();
        let mut view = NoteDetailView::new(NoteId::from(1));
        view.load(&api).await;

        let navigation = view.delete(&api, &true).await;

        assert_eq!(navigation, None);
        assert_eq!(view.state().error(), Some(DELETE_FAILED));
    }
}
