// src/ports/html.rs
use crate::application::{
    AiPanelState, AiToolsView, FormMode, FormState, NoteDetailView, NoteFormView, NotesListView,
    Route, Section, ViewState,
};
use crate::constants::{APP_NAME, DELETE_CONFIRMATION, EMPTY_LIST_MESSAGE, PREVIEW_CHAR_LIMIT};
use crate::domain::{AiTool, Note, NoteId};
use crate::util::text::{format_long_date, format_short_date, truncate_preview};
use chrono::{Datelike, Utc};
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

/// Renders views as complete HTML pages with the shared header and footer.
#[derive(Debug, Clone)]
pub struct HtmlPresenter {
    year: i32,
}

impl HtmlPresenter {
    pub fn new() -> Self {
        Self {
            year: Utc::now().year(),
        }
    }

    pub fn home(&self) -> String {
        let body = r#"<div class="row mb-4">
  <div class="col">
    <div class="text-center py-5">
      <h1>Welcome to AI Demo App</h1>
      <p class="lead">Manage your notes and let AI summarize, brainstorm, polish and answer.</p>
    </div>
  </div>
</div>
<div class="row">
  <div class="col-md-6 mb-4">
    <div class="card h-100">
      <div class="card-body">
        <h5 class="card-title">Notes Management</h5>
        <p class="card-text">Create, read, update, and delete notes with a simple interface.
        Search through your notes to find exactly what you're looking for.</p>
        <a class="btn btn-primary" href="/notes">Go to Notes</a>
      </div>
    </div>
  </div>
  <div class="col-md-6 mb-4">
    <div class="card h-100">
      <div class="card-body">
        <h5 class="card-title">AI Tools</h5>
        <p class="card-text">Summarize text, generate creative ideas, improve your writing,
        and answer questions.</p>
        <a class="btn btn-primary" href="/ai-tools">Explore AI Tools</a>
      </div>
    </div>
  </div>
</div>"#;
        self.page("Home", Some(Section::Home), body)
    }

    pub fn not_found(&self) -> String {
        let body = r#"<div class="text-center mt-5">
  <h1>404</h1>
  <h2>Page Not Found</h2>
  <p class="lead">The page you are looking for does not exist or has been moved.</p>
  <a class="btn btn-primary" href="/">Go to Home</a>
</div>"#;
        self.page("Page Not Found", None, body)
    }

    #[instrument(level = "trace", skip_all)]
    pub fn notes_list(&self, view: &NotesListView) -> String {
        let query = view.query();
        let clear = if query.is_empty() {
            String::new()
        } else {
            r#"<a class="btn btn-outline-secondary" href="/notes">Clear</a>"#.to_string()
        };

        let content = match view.state() {
            ViewState::Loading => spinner(),
            ViewState::Failed { message } => error_banner(message),
            ViewState::Ready(notes) if notes.is_empty() => format!(
                r#"<div class="text-center"><p>{}</p></div>"#,
                EMPTY_LIST_MESSAGE
            ),
            ViewState::Ready(notes) => {
                let cards: String = notes.iter().map(note_card).collect();
                format!(r#"<div class="row row-cols-1 row-cols-md-2 row-cols-lg-3 g-4">{cards}</div>"#)
            }
        };

        let body = format!(
            r#"<div class="d-flex justify-content-between align-items-center mb-4">
  <h1>Notes</h1>
  <a class="btn btn-primary" href="/notes/new">Create New Note</a>
</div>
<form method="get" action="/notes" class="mb-4">
  <div class="input-group">
    <input type="text" class="form-control" name="query" placeholder="Search notes..." value="{query}">
    <button type="submit" class="btn btn-outline-secondary">Search</button>
    {clear}
  </div>
</form>
{content}"#,
            query = encode_double_quoted_attribute(query),
        );
        self.page("Notes", Some(Section::Notes), &body)
    }

    pub fn note_detail(&self, view: &NoteDetailView) -> String {
        let body = match view.state() {
            ViewState::Loading => spinner(),
            ViewState::Failed { message } => format!("{}{}", error_banner(message), back_to_notes()),
            ViewState::Ready(note) => format!(
                r#"{back}
<div class="card">
  <div class="card-header d-flex justify-content-between align-items-center">
    <h2>{title}</h2>
    <div>
      <a class="btn btn-outline-primary me-2" href="{edit}">Edit</a>
      {delete}
    </div>
  </div>
  <div class="card-body">
    <p class="card-text note-content">{content}</p>
  </div>
  <div class="card-footer">
    <small class="text-muted">
      Created: {created}
      <br>
      Last updated: {updated}
    </small>
  </div>
</div>"#,
                back = back_to_notes(),
                title = encode_text(&note.title),
                edit = encode_double_quoted_attribute(&Route::EditNote(note.id.clone()).path()),
                delete = delete_form(&note.id, "detail", "btn btn-outline-danger"),
                content = encode_text(&note.content),
                created = format_long_date(&note.created_at),
                updated = format_long_date(&note.updated_at),
            ),
        };
        let title = view
            .state()
            .data()
            .map_or_else(|| "Note".to_string(), |note| note.title.clone());
        self.page(&title, Some(Section::Notes), &body)
    }

    pub fn note_form(&self, view: &NoteFormView) -> String {
        let (heading, submit_label, busy_label) = if view.is_edit() {
            ("Edit Note", "Update Note", "Updating...")
        } else {
            ("Create New Note", "Create Note", "Creating...")
        };

        if matches!(view.state(), FormState::Loading) {
            return self.page(heading, Some(Section::Notes), &spinner());
        }

        let action = match view.mode() {
            FormMode::Create => "/notes".to_string(),
            FormMode::Edit(id) => Route::EditNote(id.clone()).path(),
        };
        let submitting = matches!(view.state(), FormState::Submitting { .. });
        let disabled = if submitting { " disabled" } else { "" };
        let (title, content) = view
            .draft()
            .map(|d| (d.title.as_str(), d.content.as_str()))
            .unwrap_or_default();
        let banner = view.error().map(error_banner).unwrap_or_default();
        let title_class = if view.title_invalid() {
            "form-control is-invalid"
        } else {
            "form-control"
        };

        let body = format!(
            r#"{back}
<div class="card">
  <div class="card-header"><h2>{heading}</h2></div>
  <div class="card-body">
    {banner}
    <form method="post" action="{action}">
      <div class="mb-3">
        <label class="form-label" for="noteTitle">Title</label>
        <input type="text" class="{title_class}" id="noteTitle" name="title" value="{title}" required placeholder="Enter note title">
        <div class="invalid-feedback">Please provide a title.</div>
      </div>
      <div class="mb-3">
        <label class="form-label" for="noteContent">Content</label>
        <textarea class="form-control" id="noteContent" name="content" rows="10" placeholder="Enter note content">{content}</textarea>
      </div>
      <div class="d-flex justify-content-end">
        <a class="btn btn-secondary me-2{disabled}" href="/notes">Cancel</a>
        <button type="submit" class="btn btn-primary"{disabled}>{label}</button>
      </div>
    </form>
  </div>
</div>"#,
            back = back_to_notes(),
            action = encode_double_quoted_attribute(&action),
            title = encode_double_quoted_attribute(title),
            content = encode_text(content),
            label = if submitting { busy_label } else { submit_label },
        );
        self.page(heading, Some(Section::Notes), &body)
    }

    pub fn ai_tools(&self, view: &AiToolsView) -> String {
        let active = view.tool();
        let tabs: String = AiTool::ALL.iter().map(|tool| tool_tab(*tool, active)).collect();

        let (banner, result) = match view.state() {
            AiPanelState::Failed(message) => (error_banner(message), String::new()),
            AiPanelState::Done(result) => (
                String::new(),
                format!(
                    r#"<div class="mt-4"><h5>Result:</h5><div class="ai-result">{}</div></div>"#,
                    encode_text(result)
                ),
            ),
            AiPanelState::Idle | AiPanelState::Processing => (String::new(), String::new()),
        };
        let processing = *view.state() == AiPanelState::Processing;
        let button = if processing {
            r#"<button type="submit" class="btn btn-primary" disabled>Processing...</button>"#.to_string()
        } else {
            let disabled = if view.can_submit() { "" } else { " disabled" };
            format!(
                r#"<button type="submit" class="btn btn-primary"{disabled}>{}</button>"#,
                active.submit_label()
            )
        };

        let body = format!(
            r#"<h1 class="mb-4">AI Tools</h1>
<div class="d-flex flex-wrap mb-4">{tabs}</div>
<div class="card">
  <div class="card-body">
    <h5 class="card-title">{heading}</h5>
    <p class="card-text mb-4">{description}</p>
    {banner}
    <form method="post" action="/ai-tools">
      <input type="hidden" name="tool" value="{tool}">
      <div class="mb-3">
        <textarea class="form-control" name="text" rows="6" required placeholder="{placeholder}" oninput="this.form.querySelector('button[type=submit]').disabled = !this.value.trim()">{input}</textarea>
      </div>
      <div class="d-grid">{button}</div>
    </form>
    {result}
  </div>
</div>"#,
            heading = active.heading(),
            description = active.description(),
            tool = active.name(),
            placeholder = active.placeholder(),
            input = encode_text(view.input()),
        );
        self.page("AI Tools", Some(Section::AiTools), &body)
    }

    fn page(&self, title: &str, section: Option<Section>, body: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} | {app}</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
    <style>
        .note-card {{ transition: transform 0.2s; }}
        .note-card:hover {{ transform: translateY(-4px); }}
        .note-content, .ai-result {{ white-space: pre-wrap; }}
        .ai-result {{
            background-color: #f8f9fa;
            padding: 1rem;
            border-radius: 4px;
        }}
        .ai-tool-card {{ width: 12rem; }}
        .ai-tool-card.active {{ border-color: #0d6efd; background-color: #e7f1ff; }}
    </style>
</head>
<body>
<div class="App d-flex flex-column min-vh-100">
    <nav class="navbar navbar-expand-lg navbar-dark bg-dark">
        <div class="container">
            <a class="navbar-brand" href="/">{app}</a>
            <div class="navbar-nav me-auto">
                {home}
                {notes}
                {ai}
            </div>
        </div>
    </nav>
    <main class="container flex-grow-1 py-4">
{body}
    </main>
    <footer class="footer mt-auto py-3 bg-light">
        <div class="container text-center">
            <span class="text-muted">&copy; {year} {app}</span>
        </div>
    </footer>
</div>
</body>
</html>"#,
            title = encode_text(title),
            app = APP_NAME,
            home = nav_link("/", "Home", section == Some(Section::Home)),
            notes = nav_link("/notes", "Notes", section == Some(Section::Notes)),
            ai = nav_link("/ai-tools", "AI Tools", section == Some(Section::AiTools)),
            year = self.year,
        )
    }
}

impl Default for HtmlPresenter {
    fn default() -> Self {
        Self::new()
    }
}

fn nav_link(href: &str, label: &str, active: bool) -> String {
    if active {
        format!(r#"<a class="nav-link active" aria-current="page" href="{href}">{label}</a>"#)
    } else {
        format!(r#"<a class="nav-link" href="{href}">{label}</a>"#)
    }
}

fn spinner() -> String {
    r#"<div class="text-center mt-5">
  <div class="spinner-border" role="status"><span class="visually-hidden">Loading...</span></div>
</div>"#
        .to_string()
}

fn error_banner(message: &str) -> String {
    format!(
        r#"<div class="alert alert-danger alert-dismissible" role="alert">{}<button type="button" class="btn-close" aria-label="Close" onclick="this.parentElement.remove()"></button></div>"#,
        encode_text(message)
    )
}

fn back_to_notes() -> String {
    r#"<div class="mb-4"><a class="btn btn-outline-secondary" href="/notes">&larr; Back to Notes</a></div>"#
        .to_string()
}

fn delete_form(id: &NoteId, from: &str, button_class: &str) -> String {
    let action = format!("{}/delete", Route::NoteDetail(id.clone()).path());
    format!(
        r#"<form method="post" action="{action}" class="d-inline" onsubmit="return confirm('{prompt}')">
        <input type="hidden" name="confirmed" value="yes">
        <input type="hidden" name="from" value="{from}">
        <button type="submit" class="{button_class}">Delete</button>
      </form>"#,
        action = encode_double_quoted_attribute(&action),
        prompt = DELETE_CONFIRMATION,
    )
}

fn note_card(note: &Note) -> String {
    format!(
        r#"<div class="col">
  <div class="card note-card h-100">
    <div class="card-body">
      <h5 class="card-title">{title}</h5>
      <p class="card-text">{preview}</p>
    </div>
    <div class="card-footer bg-white">
      <small class="text-muted">Last updated: {updated}</small>
      <div class="mt-2 d-flex justify-content-between">
        <a class="btn btn-outline-primary btn-sm" href="{view}">View</a>
        <div>
          <a class="btn btn-outline-secondary btn-sm me-2" href="{edit}">Edit</a>
          {delete}
        </div>
      </div>
    </div>
  </div>
</div>"#,
        title = encode_text(&note.title),
        preview = encode_text(&truncate_preview(&note.content, PREVIEW_CHAR_LIMIT)),
        updated = format_short_date(&note.updated_at),
        view = encode_double_quoted_attribute(&Route::NoteDetail(note.id.clone()).path()),
        edit = encode_double_quoted_attribute(&Route::EditNote(note.id.clone()).path()),
        delete = delete_form(&note.id, "list", "btn btn-outline-danger btn-sm"),
    )
}

fn tool_tab(tool: AiTool, active: AiTool) -> String {
    let class = if tool == active {
        "card ai-tool-card m-2 active"
    } else {
        "card ai-tool-card m-2"
    };
    format!(
        r#"<a class="{class} text-decoration-none text-reset" href="/ai-tools?tool={name}">
  <div class="card-body text-center"><h6 class="card-title">{title}</h6></div>
</a>"#,
        name = tool.name(),
        title = tool.tab_title(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_active_section_when_rendering_page_then_only_that_link_is_active() {
        let presenter = HtmlPresenter::new();

        let html = presenter.page("T", Some(Section::Notes), "");

        assert!(html.contains(r#"<a class="nav-link active" aria-current="page" href="/notes">Notes</a>"#));
        assert!(html.contains(r#"<a class="nav-link" href="/">Home</a>"#));
        assert!(html.contains(r#"<a class="nav-link" href="/ai-tools">AI Tools</a>"#));
    }

    #[test]
    fn given_markup_in_message_when_rendering_banner_then_escapes_it() {
        let banner = error_banner("<script>alert(1)</script>");

        assert!(!banner.contains("<script>"));
        assert!(banner.contains("&lt;script&gt;"));
        assert!(banner.contains("btn-close"));
    }

    #[test]
    fn given_note_id_when_rendering_delete_form_then_posts_to_delete_action_with_confirm() {
        let form = delete_form(&NoteId::from(9), "list", "btn");

        assert!(form.contains(r#"action="/notes/9/delete""#));
        assert!(form.contains("Are you sure you want to delete this note?"));
        assert!(form.contains(r#"name="from" value="list""#));
    }

    #[test]
    fn given_inactive_tool_when_rendering_tab_then_not_marked_active() {
        let tab = tool_tab(AiTool::Ideas, AiTool::Summarize);

        assert!(!tab.contains("active"));
        assert!(tab.contains("href=\"/ai-tools?tool=ideas\""));
        assert!(tab.contains("Generate Ideas"));
    }
}
