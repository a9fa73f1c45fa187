//! Free-form note type.

use serde::{Deserialize, Serialize};

/// A free-form note or Q&A draft.
///
/// Notes are created client-side with a locally generated id before being
/// persisted; the record returned by the backend supersedes the local draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// String id. Locally generated drafts use a millisecond timestamp.
    pub id: String,
    /// Note title.
    pub title: String,
    /// Note body.
    pub content: String,
    /// Creation timestamp as a display string.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Note {
    /// Build a local draft from already-trimmed title and content.
    ///
    /// The id is the current Unix time in milliseconds; `created_at` is a
    /// human-readable local timestamp. Both are placeholders until the
    /// backend's created record replaces this draft.
    pub fn local_draft(title: String, content: String) -> Self {
        let now = chrono::Local::now();
        Self {
            id: now.timestamp_millis().to_string(),
            title,
            content,
            created_at: now.format("%d/%m/%Y %H:%M").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_created_at_wire_name() {
        let json = r#"{"id":"123","title":"t","content":"c","createdAt":"2025-01-01"}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.created_at, "2025-01-01");
    }

    #[test]
    fn local_draft_has_numeric_millisecond_id() {
        let note = Note::local_draft("t".into(), "c".into());
        let millis: i64 = note.id.parse().expect("id should be numeric");
        assert!(millis > 0);
    }

    #[test]
    fn serializes_with_wire_name() {
        let note = Note {
            id: "1".into(),
            title: "t".into(),
            content: "c".into(),
            created_at: "x".into(),
        };
        let value = serde_json::to_value(&note).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
