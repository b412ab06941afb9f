// src/ports/text.rs
use crate::application::{AiPanelState, AiToolsView, NoteDetailView, NotesListView, ViewState};
use crate::constants::{EMPTY_LIST_MESSAGE, PREVIEW_CHAR_LIMIT};
use crate::domain::Note;
use crate::util::text::{format_long_date, format_short_date, truncate_preview};

/// Plain-text rendering of views for the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    /// One block per note: id, title and date on the first line, preview
    /// indented below.
    pub fn notes_list(&self, view: &NotesListView) -> String {
        match view.state() {
            ViewState::Loading => "Loading...\n".to_string(),
            ViewState::Failed { message } => format!("{message}\n"),
            ViewState::Ready(notes) if notes.is_empty() => format!("{EMPTY_LIST_MESSAGE}\n"),
            ViewState::Ready(notes) => notes.iter().map(list_entry).collect(),
        }
    }

    pub fn note_detail(&self, view: &NoteDetailView) -> String {
        match view.state() {
            ViewState::Loading => "Loading...\n".to_string(),
            ViewState::Failed { message } => format!("{message}\n"),
            ViewState::Ready(note) => format!(
                "{title}\n{rule}\n\n{content}\n\nCreated: {created}\nLast updated: {updated}\n",
                title = note.title,
                rule = "=".repeat(note.title.chars().count().max(1)),
                content = note.content,
                created = format_long_date(&note.created_at),
                updated = format_long_date(&note.updated_at),
            ),
        }
    }

    pub fn ai_result(&self, view: &AiToolsView) -> String {
        match view.state() {
            AiPanelState::Done(result) => format!("{result}\n"),
            AiPanelState::Failed(message) => format!("{message}\n"),
            AiPanelState::Idle | AiPanelState::Processing => String::new(),
        }
    }
}

fn list_entry(note: &Note) -> String {
    let preview = truncate_preview(&note.content, PREVIEW_CHAR_LIMIT);
    let mut entry = format!(
        "{}\t{}\t{}\n",
        note.id,
        note.title,
        format_short_date(&note.updated_at)
    );
    if !preview.is_empty() {
        // Keep multi-line content inside the indented block
        entry.push_str(&format!("    {}\n", preview.replace('\n', " ")));
    }
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteId;
    use chrono::{TimeZone, Utc};

    fn note(title: &str, content: &str) -> Note {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 0).unwrap();
        Note {
            id: NoteId::from(7),
            title: title.to_string(),
            content: content.to_string(),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn given_note_when_rendering_list_entry_then_shows_id_title_date_and_preview() {
        let entry = list_entry(&note("Groceries", "milk,\neggs"));

        assert_eq!(entry, "7\tGroceries\tMar 1, 2024\n    milk, eggs\n");
    }

    #[test]
    fn given_empty_content_when_rendering_list_entry_then_single_line() {
        let entry = list_entry(&note("Empty", ""));

        assert_eq!(entry, "7\tEmpty\tMar 1, 2024\n");
    }

    #[test]
    fn given_idle_panel_when_rendering_ai_result_then_empty() {
        assert_eq!(TextPresenter::new().ai_result(&AiToolsView::new()), "");
    }
}
