// src/application/note_form.rs
use crate::application::{NoteApi, Route};
use crate::domain::{NoteDraft, NoteId};
use tracing::{debug, error, info, instrument};

pub const FETCH_FAILED: &str = "Failed to fetch note. It may have been deleted or does not exist.";
pub const CREATE_FAILED: &str = "Failed to create note. Please try again.";
pub const UPDATE_FAILED: &str = "Failed to update note. Please try again.";
pub const TITLE_REQUIRED: &str = "Please provide a title.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(NoteId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    /// Edit mode only: the note is being fetched.
    Loading,
    Editing {
        draft: NoteDraft,
        error: Option<String>,
        /// Set once a submit was rejected by validation.
        validated: bool,
    },
    Submitting {
        draft: NoteDraft,
    },
}

/// Create (`/notes/new`) and edit (`/notes/edit/{id}`) form.
#[derive(Debug)]
pub struct NoteFormView {
    mode: FormMode,
    state: FormState,
}

impl NoteFormView {
    pub fn create() -> Self {
        Self::restore(FormMode::Create, NoteDraft::default())
    }

    pub fn edit(id: NoteId) -> Self {
        Self {
            mode: FormMode::Edit(id),
            state: FormState::Loading,
        }
    }

    /// Rebuild a form around a draft the user already filled in.
    pub fn restore(mode: FormMode, draft: NoteDraft) -> Self {
        Self {
            mode,
            state: FormState::Editing {
                draft,
                error: None,
                validated: false,
            },
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn draft(&self) -> Option<&NoteDraft> {
        match &self.state {
            FormState::Loading => None,
            FormState::Editing { draft, .. } | FormState::Submitting { draft } => Some(draft),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FormState::Editing { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// True when the last submit was rejected for a blank title.
    pub fn title_invalid(&self) -> bool {
        match &self.state {
            FormState::Editing { draft, validated, .. } => *validated && draft.validate().is_err(),
            _ => false,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        if let FormState::Editing { draft, .. } = &mut self.state {
            draft.title = title.into();
        }
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        if let FormState::Editing { draft, .. } = &mut self.state {
            draft.content = content.into();
        }
    }

    /// Fetches the note in edit mode; a create form is ready immediately.
    #[instrument(level = "debug", skip_all)]
    pub async fn load<A: NoteApi + ?Sized>(&mut self, api: &A) {
        let FormMode::Edit(id) = &self.mode else {
            return;
        };

        self.state = FormState::Loading;
        let (draft, error) = match api.get_note(id).await {
            Ok(note) => (NoteDraft::from(&note), None),
            Err(err) => {
                error!(error = %err, note_id = %id, "Error fetching note");
                (NoteDraft::default(), Some(FETCH_FAILED.to_string()))
            }
        };
        self.state = FormState::Editing {
            draft,
            error,
            validated: false,
        };
    }

    /// Validates and sends the draft; returns where to navigate on success.
    ///
    /// Ignored while loading or while a submit is already in flight.
    #[instrument(level = "debug", skip_all)]
    pub async fn submit<A: NoteApi + ?Sized>(&mut self, api: &A) -> Option<Route> {
        let draft = match &mut self.state {
            FormState::Editing {
                draft, validated, ..
            } => {
                if draft.validate().is_err() {
                    debug!("Rejected submit without title");
                    *validated = true;
                    return None;
                }
                draft.clone()
            }
            FormState::Loading | FormState::Submitting { .. } => return None,
        };

        self.state = FormState::Submitting {
            draft: draft.clone(),
        };

        let (result, failure) = match &self.mode {
            FormMode::Create => (api.create_note(&draft).await, CREATE_FAILED),
            FormMode::Edit(id) => (api.update_note(id, &draft).await, UPDATE_FAILED),
        };

        match result {
            Ok(note) => {
                info!(note_id = %note.id, "Saved note");
                Some(Route::NotesList)
            }
            Err(err) => {
                error!(error = %err, "Error saving note");
                self.state = FormState::Editing {
                    draft,
                    error: Some(failure.to_string()),
                    validated: false,
                };
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
    async fn given_create_form_when_submitting_valid_draft_then_creates_and_navigates_to_list() {
        // Arrange
        let api = MockNoteApi::builder().build();
        let mut form = NoteFormView::create();
        form.set_title("Groceries");
        form.set_content("milk, eggs");

        // Act
        let navigation = form.submit(&api).await;

        // Assert
        assert_eq!(navigation, Some(Route::NotesList));
        let notes = api.notes();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Groceries");
        assert_eq!(notes[0].content, "milk, eggs");
    }

    #[tokio::test]
    async fn given_blank_title_when_submitting_then_marks_validated_and_sends_nothing() {
        let api = MockNoteApi::builder().build();
        let mut form = NoteFormView::create();
        form.set_title("  ");

        let navigation = form.submit(&api).await;

        assert_eq!(navigation, None);
        assert!(form.title_invalid());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn given_create_failure_when_submitting_then_keeps_draft_and_shows_create_error() {
        let api = MockNoteApi::builder()
            .with_failure(MockOperation::Create)
            .build();
        let mut form = NoteFormView::create();
        form.set_title("Draft");

        let navigation = form.submit(&api).await;

        assert_eq!(navigation, None);
        assert_eq!(form.error(), Some(CREATE_FAILED));
        assert_eq!(form.draft().unwrap().title, "Draft");
    }

    #[tokio::test]
    async fn given_edit_form_when_loading_then_prefills_from_note() {
        let api = MockNoteApi::builder().with_note("Old", "old body").build();
        let mut form = NoteFormView::edit(NoteId::from(1));

        form.load(&api).await;

        assert_eq!(form.draft(), Some(&NoteDraft::new("Old", "old body")));
        assert_eq!(form.error(), None);
    }

    #[tokio::test]
    async fn given_missing_note_when_loading_edit_form_then_empty_draft_with_fetch_error() {
        let api = MockNoteApi::builder().build();
        let mut form = NoteFormView::edit(NoteId::from(5));

        form.load(&api).await;

        assert_eq!(form.draft(), Some(&NoteDraft::default()));
        assert_eq!(form.error(), Some(FETCH_FAILED));
    }

    #[tokio::test]
    async fn given_edit_form_when_submitting_then_updates_note_in_place() {
        let api = MockNoteApi::builder().with_note("Old", "old body").build();
        let mut form = NoteFormView::edit(NoteId::from(1));
        form.load(&api).await;
        form.set_content("new body");

        let navigation = form.submit(&api).await;

        assert_eq!(navigation, Some(Route::NotesList));
        assert_eq!(api.notes()[0].content, "new body");
        assert!(api.calls().contains(&MockOperation::Update));
    }

    #[tokio::test]
    async fn given_update_failure_when_submitting_then_shows_update_error() {
        let api = MockNoteApi::builder()
            .with_note("Old", "")
            .with_failure(MockOperation::Update)
            .build();
        let mut form = NoteFormView::edit(NoteId::from(1));
        form.load(&api).await;

        form.submit(&api).await;

        assert_eq!(form.error(), Some(UPDATE_FAILED));
    }

    #[tokio::test]
    async fn given_unloaded_edit_form_when_submitting_then_ignored() {
        let api = MockNoteApi::builder().with_note("Old", "").build();
        let mut form = NoteFormView::edit(NoteId::from(1));

        let navigation = form.submit(&api).await;

        assert_eq!(navigation, None);
        assert!(api.calls().is_empty());
        assert_eq!(form.state(), &FormState::Loading);
    }
}
