// src/application/mod.rs
pub mod ai_tools;
pub mod api;
pub mod note_detail;
pub mod note_form;
pub mod notes_list;
pub mod route;
pub mod view_state;

pub use ai_tools::{AiPanelState, AiToolsView};
pub use api::{AiApi, Confirm, NoteApi};
pub use note_detail::NoteDetailView;
pub use note_form::{FormMode, FormState, NoteFormView};
pub use notes_list::NotesListView;
pub use route::{Route, Section};
pub use view_state::ViewState;
