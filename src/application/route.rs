// src/application/route.rs
use crate::domain::NoteId;
use urlencoding::{decode, encode};

/// Where the shell should show next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    NotesList,
    NewNote,
    NoteDetail(NoteId),
    EditNote(NoteId),
    AiTools,
    NotFound(String),
}

#[derive(Debug, Clone, Copy)]
enum RouteKind {
    Home,
    NotesList,
    NewNote,
    NoteDetail,
    EditNote,
    AiTools,
}

/// Matched top to bottom; `:id` captures one segment. `/notes/new` must stay
/// above `/notes/:id`.
const ROUTE_TABLE: &[(&str, RouteKind)] = &[
    ("/", RouteKind::Home),
    ("/notes", RouteKind::NotesList),
    ("/notes/new", RouteKind::NewNote),
    ("/notes/:id", RouteKind::NoteDetail),
    ("/notes/edit/:id", RouteKind::EditNote),
    ("/ai-tools", RouteKind::AiTools),
];

/// Top-level navigation sections highlighted in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Notes,
    AiTools,
}

impl Route {
    /// Resolve a location path as it appears on the wire (percent-encoded);
    /// query string and fragment are ignored.
    pub fn parse(location: &str) -> Self {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        ROUTE_TABLE
            .iter()
            .find_map(|(pattern, kind)| match_pattern(pattern, &segments).map(|id| build(*kind, id)))
            .unwrap_or_else(|| Route::NotFound(path.to_string()))
    }

    /// Percent-encoded path; `parse(path())` yields the same route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::NotesList => "/notes".to_string(),
            Route::NewNote => "/notes/new".to_string(),
            Route::NoteDetail(id) => format!("/notes/{}", encode(id.as_str())),
            Route::EditNote(id) => format!("/notes/edit/{}", encode(id.as_str())),
            Route::AiTools => "/ai-tools".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn section(&self) -> Option<Section> {
        match self {
            Route::Home => Some(Section::Home),
            Route::NotesList | Route::NewNote | Route::NoteDetail(_) | Route::EditNote(_) => {
                Some(Section::Notes)
            }
            Route::AiTools => Some(Section::AiTools),
            Route::NotFound(_) => None,
        }
    }
}

/// Returns `Some(captured id)` on a match; the inner option is empty for
/// patterns without a parameter. The id segment is percent-decoded.
fn match_pattern(pattern: &str, segments: &[&str]) -> Option<Option<NoteId>> {
    let parts: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    if parts.len() != segments.len() {
        return None;
    }

    let mut captured = None;
    for (part, segment) in parts.iter().zip(segments) {
        if part.starts_with(':') {
            let decoded = decode(segment).ok()?;
            captured = Some(NoteId::parse(&decoded).ok()?);
        } else if part != segment {
            return None;
        }
    }
    Some(captured)
}

fn build(kind: RouteKind, id: Option<NoteId>) -> Route {
    match (kind, id) {
        (RouteKind::Home, _) => Route::Home,
        (RouteKind::NotesList, _) => Route::NotesList,
        (RouteKind::NewNote, _) => Route::NewNote,
        (RouteKind::AiTools, _) => Route::AiTools,
        (RouteKind::NoteDetail, Some(id)) => Route::NoteDetail(id),
        (RouteKind::EditNote, Some(id)) => Route::EditNote(id),
        (RouteKind::NoteDetail | RouteKind::EditNote, None) => Route::NotFound(String::new()),
    }
}
