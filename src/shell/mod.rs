// src/shell/mod.rs
pub mod server;

use crate::application::{
    AiApi, AiToolsView, FormMode, NoteApi, NoteDetailView, NoteFormView, NotesListView, Route,
};
use crate::domain::{AiTool, NoteDraft, NoteId};
use crate::ports::HtmlPresenter;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// A rendered page and whether the route was known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub html: String,
    pub found: bool,
}

/// Result of a user action: go somewhere else, or show a page in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Navigate(Route),
    Render(Page),
}

/// Query parameters understood by the page routes.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PageQuery {
    /// Search term for `/notes`.
    pub query: Option<String>,
    /// Active tab for `/ai-tools`.
    pub tool: Option<String>,
}

impl PageQuery {
    fn tool(&self) -> Option<AiTool> {
        parse_tool(self.tool.as_deref())
    }
}

/// Lenient tool lookup for query strings and form fields; unknown names are
/// logged and dropped.
pub(crate) fn parse_tool(raw: Option<&str>) -> Option<AiTool> {
    raw?.parse::<AiTool>()
        .map_err(|err| warn!(error = %err, "Ignoring tool parameter"))
        .ok()
}

/// Where a delete was triggered from; decides which view handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteOrigin {
    List,
    #[default]
    Detail,
}

/// The application shell: owns the backend handles and turns routes and
/// user actions into pages.
#[derive(Clone)]
pub struct Shell {
    notes: Arc<dyn NoteApi>,
    ai: Arc<dyn AiApi>,
    presenter: HtmlPresenter,
}

impl Shell {
    pub fn new(notes: Arc<dyn NoteApi>, ai: Arc<dyn AiApi>) -> Self {
        Self {
            notes,
            ai,
            presenter: HtmlPresenter::new(),
        }
    }

    /// Render the view bound to `route`, loading its data first.
    #[instrument(level = "debug", skip(self))]
    pub async fn render(&self, route: &Route, query: &PageQuery) -> Page {
        let api = self.notes.as_ref();
        let html = match route {
            Route::Home => self.presenter.home(),
            Route::NotesList => {
                let mut view = NotesListView::new();
                view.set_query(query.query.clone().unwrap_or_default());
                view.search(api).await;
                self.presenter.notes_list(&view)
            }
            Route::NewNote => self.presenter.note_form(&NoteFormView::create()),
            Route::NoteDetail(id) => {
                let mut view = NoteDetailView::new(id.clone());
                view.load(api).await;
                self.presenter.note_detail(&view)
            }
            Route::EditNote(id) => {
                let mut view = NoteFormView::edit(id.clone());
                view.load(api).await;
                self.presenter.note_form(&view)
            }
            Route::AiTools => {
                let mut view = AiToolsView::new();
                if let Some(tool) = query.tool() {
                    view.select_tool(tool);
                }
                self.presenter.ai_tools(&view)
            }
            Route::NotFound(path) => {
                debug!(%path, "No route matched");
                return self.not_found();
            }
        };
        Page { html, found: true }
    }

    pub fn not_found(&self) -> Page {
        Page {
            html: self.presenter.not_found(),
            found: false,
        }
    }

    /// Create or update a note from submitted form fields.
    #[instrument(level = "debug", skip(self, draft))]
    pub async fn submit_note(&self, mode: FormMode, draft: NoteDraft) -> Outcome {
        let mut view = NoteFormView::restore(mode, draft);
        match view.submit(self.notes.as_ref()).await {
            Some(route) => Outcome::Navigate(route),
            None => Outcome::Render(Page {
                html: self.presenter.note_form(&view),
                found: true,
            }),
        }
    }

    /// Delete a note. `confirmed` carries the user's answer to the
    /// confirmation dialog.
    #[instrument(level = "debug", skip(self))]
    pub async fn delete_note(&self, id: NoteId, origin: DeleteOrigin, confirmed: bool) -> Outcome {
        let api = self.notes.as_ref();
        match origin {
            DeleteOrigin::List => {
                let mut view = NotesListView::new();
                if view.delete(api, &id, &confirmed).await || view.state().error().is_none() {
                    return Outcome::Navigate(Route::NotesList);
                }
                Outcome::Render(Page {
                    html: self.presenter.notes_list(&view),
                    found: true,
                })
            }
            DeleteOrigin::Detail => {
                let mut view = NoteDetailView::new(id.clone());
                if let Some(route) = view.delete(api, &confirmed).await {
                    return Outcome::Navigate(route);
                }
                if view.state().error().is_none() {
                    return Outcome::Navigate(Route::NoteDetail(id));
                }
                Outcome::Render(Page {
                    html: self.presenter.note_detail(&view),
                    found: true,
                })
            }
        }
    }

    /// Run `tool` on `text` and render the panel with the outcome.
    #[instrument(level = "debug", skip(self, text))]
    pub async fn run_ai(&self, tool: AiTool, text: String) -> Page {
        let mut view = AiToolsView::new();
        view.select_tool(tool);
        view.set_input(text);
        view.submit(self.ai.as_ref()).await;
        Page {
            html: self.presenter.ai_tools(&view),
            found: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{MockAiApi, MockNoteApi, MockOperation};

    fn shell(notes: MockNoteApi) -> (Shell, Arc<MockNoteApi>) {
        let notes = Arc::new(notes);
        (Shell::new(notes.clone(), Arc::new(MockAiApi::new())), notes)
    }

    #[tokio::test]
    async fn given_declined_delete_from_list_when_deleting_then_navigates_back_without_calling_backend() {
        // Arrange
        let (shell, api) = shell(MockNoteApi::builder().with_note("Keep", "me").build());

        // Act
        let outcome = shell.delete_note(NoteId::from(1), DeleteOrigin::List, false).await;

        // Assert
        assert_eq!(outcome, Outcome::Navigate(Route::NotesList));
        assert!(api.calls().is_empty());
        assert_eq!(api.notes().len(), 1);
    }

    #[tokio::test]
    async fn given_declined_delete_from_detail_when_deleting_then_stays_on_detail() {
        let (shell, _) = shell(MockNoteApi::builder().with_note("Keep", "me").build());

        let outcome = shell.delete_note(NoteId::from(1), DeleteOrigin::Detail, false).await;

        assert_eq!(outcome, Outcome::Navigate(Route::NoteDetail(NoteId::from(1))));
    }

    #[tokio::test]
    async fn given_failing_backend_when_deleting_from_list_then_renders_error_banner() {
        // Arrange
        let (shell, _) = shell(
            MockNoteApi::builder()
                .with_note("Stuck", "")
                .with_failure(MockOperation::Delete)
                .build(),
        );

        // Act
        let outcome = shell.delete_note(NoteId::from(1), DeleteOrigin::List, true).await;

        // Assert
        let Outcome::Render(page) = outcome else {
            panic!("Expected rendered page");
        };
        assert!(page.html.contains("Failed to delete note. Please try again later."));
    }

    #[tokio::test]
    async fn given_blank_title_when_submitting_note_then_rerenders_form_with_feedback() {
        let (shell, api) = shell(MockNoteApi::builder().build());

        let outcome = shell
            .submit_note(FormMode::Create, NoteDraft::new("  ", "body"))
            .await;

        let Outcome::Render(page) = outcome else {
            panic!("Expected rendered form");
        };
        assert!(page.html.contains("is-invalid"));
        assert!(page.html.contains("body"));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn given_unknown_tool_parameter_when_rendering_ai_tools_then_defaults_to_summarize() {
        let (shell, _) = shell(MockNoteApi::builder().build());
        let query = PageQuery {
            tool: Some("translate".to_string()),
            ..PageQuery::default()
        };

        let page = shell.render(&Route::AiTools, &query).await;

        assert!(page.html.contains(r#"name="tool" value="summarize""#));
    }
}
