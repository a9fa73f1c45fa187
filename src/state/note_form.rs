//! Draft state for the notes tab's add-note form.

use crate::model::Note;

/// Which note field receives text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteField {
    /// The note title line.
    Title,
    /// The note body.
    Content,
}

impl NoteField {
    /// The other field.
    pub fn toggle(self) -> Self {
        match self {
            Self::Title => Self::Content,
            Self::Content => Self::Title,
        }
    }
}

/// Draft state for one new note.
#[derive(Debug, Clone)]
pub struct NoteForm {
    /// Title draft text.
    pub title: String,
    /// Body draft text.
    pub content: String,
    /// Validation message from the last failed submit.
    pub error: Option<String>,
    /// Set once the note has been handed off; blocks re-submission.
    pub submitting: bool,
    /// Field receiving input.
    pub focus: NoteField,
}

impl NoteForm {
    /// A blank draft.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            error: None,
            submitting: false,
            focus: NoteField::Title,
        }
    }

    /// Validate and return the note to create.
    ///
    /// Both title and content must be non-blank after trimming. Returns
    /// `None` while already submitting or on validation failure.
    pub fn submission(&mut self) -> Option<Note> {
        if self.submitting {
            return None;
        }
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            self.error = Some("title and content are required".to_owned());
            return None;
        }
        self.error = None;
        self.submitting = true;
        Some(Note::local_draft(
            self.title.trim().to_owned(),
            self.content.trim().to_owned(),
        ))
    }
}

impl Default for NoteForm {
    fn default() -> Self {
        Self::new()
    }
}
