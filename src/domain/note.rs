// src/domain/note.rs
use crate::domain::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Server-assigned note identifier.
///
/// The backend emits numeric ids; the client never interprets them and keeps
/// the textual form only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Build an id from user input, rejecting blank values.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidNote("note id must not be empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for NoteId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Number(i64),
            Text(String),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Number(n) => Self(n.to_string()),
            Wire::Text(s) => Self(s),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub updated_at: DateTime<Utc>,
}

/// The editable part of a note, sent whole on create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::InvalidNote("title is required".to_string()));
        }
        Ok(())
    }
}

impl From<&Note> for NoteDraft {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }
}

/// Lenient timestamp decoding: RFC 3339, offset without colon, offset-less
/// local time (taken as UTC), or epoch milliseconds.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Millis(i64),
            Text(String),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Millis(ms) => Utc
                .timestamp_millis_opt(ms)
                .single()
                .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {ms}"))),
            Wire::Text(text) => parse_text(&text)
                .ok_or_else(|| D::Error::custom(format!("unrecognised timestamp: {text}"))),
        }
    }

    fn parse_text(text: &str) -> Option<DateTime<Utc>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
            return Some(parsed.with_timezone(&Utc));
        }
        if let Ok(parsed) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f%z") {
            return Some(parsed.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case(r#""2024-03-01T10:15:30.000+00:00""#)]
    #[case(r#""2024-03-01T10:15:30Z""#)]
    #[case(r#""2024-03-01T11:15:30.000+0100""#)]
    #[case(r#""2024-03-01T10:15:30""#)]
    #[case("1709288130000")]
    fn given_backend_timestamp_format_when_decoding_note_then_normalises_to_utc(#[case] stamp: &str) {
        let json = format!(
            r#"{{"id": 7, "title": "T", "content": "C", "createdAt": {stamp}, "updatedAt": {stamp}}}"#
        );

        let note: Note = serde_json::from_str(&json).expect("note should decode");

        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 30).unwrap();
        assert_eq!(note.created_at, expected);
        assert_eq!(note.updated_at, expected);
    }

    #[test]
    fn given_numeric_id_when_decoding_then_keeps_textual_form() {
        let json = r#"{"id": 42, "title": "T", "content": "", "createdAt": 0, "updatedAt": 0}"#;

        let note: Note = serde_json::from_str(json).unwrap();

        assert_eq!(note.id.as_str(), "42");
    }

    #[test]
    fn given_string_id_when_decoding_then_accepts_it() {
        let json = r#"{"id": "abc-1", "title": "T", "createdAt": 0, "updatedAt": 0}"#;

        let note: Note = serde_json::from_str(json).unwrap();

        assert_eq!(note.id.as_str(), "abc-1");
        assert_eq!(note.content, "");
    }

    #[test]
    fn given_garbage_timestamp_when_decoding_then_fails() {
        let json = r#"{"id": 1, "title": "T", "createdAt": "yesterday", "updatedAt": 0}"#;

        assert!(serde_json::from_str::<Note>(json).is_err());
    }

    #[rstest]
    #[case("", false)]
    #[case("   ", false)]
    #[case("Groceries", true)]
    #[case("  padded  ", true)]
    fn given_title_when_validating_draft_then_requires_non_blank(#[case] title: &str, #[case] valid: bool) {
        let draft = NoteDraft::new(title, "body");

        assert_eq!(draft.validate().is_ok(), valid);
    }

    #[test]
    fn given_blank_input_when_parsing_note_id_then_rejects() {
        assert!(NoteId::parse("  ").is_err());
        assert_eq!(NoteId::parse(" 12 ").unwrap().as_str(), "12");
    }
}
