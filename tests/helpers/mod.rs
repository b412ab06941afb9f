use ainotes::domain::{Note, NoteId};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

/// Fixed timestamps shared by the fixtures
#[allow(dead_code)]
pub mod stamps {
    pub const CREATED: &str = "2024-03-01T10:15:00";
    pub const UPDATED: &str = "2024-03-02T08:30:00";
}

/// A backend note body as the service sends it: numeric id, naive local
/// timestamps.
#[allow(dead_code)]
pub fn note_json(id: u64, title: &str, content: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "content": content,
        "createdAt": stamps::CREATED,
        "updatedAt": stamps::UPDATED,
    })
}

/// The decoded counterpart of [`note_json`].
#[allow(dead_code)]
pub fn note(id: u64, title: &str, content: &str) -> Note {
    Note {
        id: NoteId::from(id),
        title: title.to_string(),
        content: content.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 3, 2, 8, 30, 0).unwrap(),
    }
}
