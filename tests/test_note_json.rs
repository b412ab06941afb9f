mod helpers;

use ainotes::domain::{AiRequest, AiResponse, Note, NoteDraft};
use anyhow::Result;
use helpers::{note, note_json};

#[test]
fn given_note_when_serializing_to_json_then_uses_camel_case_fields() -> Result<()> {
    // Arrange
    let note = note(7, "Groceries", "milk, eggs");

    // Act
    let json = serde_json::to_string(&note)?;

    // Assert
    assert!(json.contains(r#""id":"7""#));
    assert!(json.contains(r#""title":"Groceries""#));
    assert!(json.contains(r#""content":"milk, eggs""#));
    assert!(json.contains(r#""createdAt""#));
    assert!(json.contains(r#""updatedAt""#));
    assert!(!json.contains("created_at"));
    Ok(())
}

#[test]
fn given_backend_body_when_decoding_then_matches_fixture_note() -> Result<()> {
    // Arrange
    let body = note_json(7, "Groceries", "milk, eggs");

    // Act
    let decoded: Note = serde_json::from_value(body)?;

    // Assert
    assert_eq!(decoded, note(7, "Groceries", "milk, eggs"));
    Ok(())
}

#[test]
fn given_body_without_content_when_decoding_then_content_is_empty() -> Result<()> {
    // Arrange
    let body = r#"{"id": 1, "title": "Only title",
        "createdAt": "2024-03-01T10:15:00Z", "updatedAt": "2024-03-01T10:15:00Z"}"#;

    // Act
    let decoded: Note = serde_json::from_str(body)?;

    // Assert
    assert_eq!(decoded.content, "");
    Ok(())
}

#[test]
fn given_list_body_when_decoding_then_keeps_server_order() -> Result<()> {
    let body = serde_json::json!([note_json(2, "B", ""), note_json(1, "A", "")]);

    let notes: Vec<Note> = serde_json::from_value(body)?;

    let ids: Vec<_> = notes.iter().map(|n| n.id.to_string()).collect();
    assert_eq!(ids, vec!["2", "1"]);
    Ok(())
}

#[test]
fn given_draft_when_serializing_then_sends_only_title_and_content() -> Result<()> {
    // Arrange
    let draft = NoteDraft::new("Groceries", "milk");

    // Act
    let json = serde_json::to_value(&draft)?;

    // Assert
    assert_eq!(json, serde_json::json!({"title": "Groceries", "content": "milk"}));
    Ok(())
}

#[test]
fn given_ai_bodies_when_converting_then_use_text_and_result_fields() -> Result<()> {
    let request = serde_json::to_value(AiRequest {
        text: "hello".to_string(),
    })?;
    let response: AiResponse = serde_json::from_str(r#"{"result": "hi"}"#)?;

    assert_eq!(request, serde_json::json!({"text": "hello"}));
    assert_eq!(response.result, "hi");
    Ok(())
}
