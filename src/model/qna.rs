//! Q&A record type.

use serde::{Deserialize, Serialize};

/// A question/answer pair with category and tags.
///
/// Immutable once fetched: edits and refetches replace the record wholesale
/// rather than mutating fields in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QnaRecord {
    /// Backend-assigned numeric id.
    pub id: u64,
    /// The question text.
    pub question: String,
    /// The answer text. May contain embedded newlines.
    pub answer: String,
    /// Single category label.
    pub category: String,
    /// Ordered tag list. Order is preserved as the backend sent it.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Payload for creating or updating a Q&A record.
///
/// The id is absent: creation gets one from the backend, updates carry it in
/// the URL path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QnaPayload {
    /// The question text, already trimmed.
    pub question: String,
    /// The answer text, already trimmed.
    pub answer: String,
    /// Category label, already trimmed.
    pub category: String,
    /// Tags, each trimmed and deduplicated.
    pub tags: Vec<String>,
}
