//! Create/edit form state for Q&A records.
//!
//! Lifecycle: the form is opened as a draft (blank for create, prefilled for
//! edit), stays open across validation failures with per-field errors, and
//! flips to `submitting` once a valid payload has been handed to the shell.
//! The shell closes it when the save response arrives.

use crate::model::{QnaPayload, QnaRecord};

/// Category choices offered by the form, cycled in order.
pub const CATEGORY_CHOICES: [&str; 6] = [
    "General",
    "Technical",
    "Policy",
    "Documentation",
    "Support",
    "Other",
];

/// Which form field currently receives text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// The question text.
    Question,
    /// The answer text.
    Answer,
    /// The category selector.
    Category,
    /// The tag entry line.
    TagInput,
}

impl FormField {
    /// The field after this one in tab order, wrapping.
    pub fn next(self) -> Self {
        match self {
            Self::Question => Self::Answer,
            Self::Answer => Self::Category,
            Self::Category => Self::TagInput,
            Self::TagInput => Self::Question,
        }
    }

    /// The field before this one in tab order, wrapping.
    pub fn prev(self) -> Self {
        match self {
            Self::Question => Self::TagInput,
            Self::Answer => Self::Question,
            Self::Category => Self::Answer,
            Self::TagInput => Self::Category,
        }
    }
}

/// Per-field validation messages. Empty means the draft is submittable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    /// Error on the question field.
    pub question: Option<String>,
    /// Error on the answer field.
    pub answer: Option<String>,
}

impl FieldErrors {
    /// Whether no field carries an error.
    pub fn is_empty(&self) -> bool {
        self.question.is_none() && self.answer.is_none()
    }
}

/// Draft state for creating or editing one record.
#[derive(Debug, Clone)]
pub struct QnaForm {
    /// The record being edited, or `None` for a create.
    pub editing_id: Option<u64>,
    /// Question draft text.
    pub question: String,
    /// Answer draft text.
    pub answer: String,
    /// Index into [`CATEGORY_CHOICES`].
    pub category_index: usize,
    /// Tags already attached to the draft.
    pub tags: Vec<String>,
    /// Tag currently being typed, not yet attached.
    pub tag_input: String,
    /// Validation messages from the last failed submit.
    pub errors: FieldErrors,
    /// Set once a payload has been handed off; blocks re-submission.
    pub submitting: bool,
    /// Field receiving input.
    pub focus: FormField,
}

impl QnaForm {
    /// A blank draft for creating a new record.
    pub fn create() -> Self {
        Self {
            editing_id: None,
            question: String::new(),
            answer: String::new(),
            category_index: 0,
            tags: Vec::new(),
            tag_input: String::new(),
            errors: FieldErrors::default(),
            submitting: false,
            focus: FormField::Question,
        }
    }

    /// A draft prefilled from an existing record.
    pub fn edit(record: &QnaRecord) -> Self {
        let category_index = CATEGORY_CHOICES
            .iter()
            .position(|c| *c == record.category)
            .unwrap_or(CATEGORY_CHOICES.len() - 1);
        Self {
            editing_id: Some(record.id),
            question: record.question.clone(),
            answer: record.answer.clone(),
            category_index,
            tags: record.tags.clone(),
            tag_input: String::new(),
            errors: FieldErrors::default(),
            submitting: false,
            focus: FormField::Question,
        }
    }

    /// The currently selected category label.
    pub fn category(&self) -> &'static str {
        CATEGORY_CHOICES[self.category_index]
    }

    /// Select the next category, wrapping.
    pub fn cycle_category(&mut self) {
        self.category_index = (self.category_index + 1) % CATEGORY_CHOICES.len();
    }

    /// Attach the pending tag input to the draft.
    ///
    /// The tag is trimmed; blank input and tags already present are dropped
    /// silently, so adding the same tag twice leaves a single entry.
    pub fn add_tag(&mut self) {
        let tag = self.tag_input.trim();
        if !tag.is_empty() && !self.tags.iter().any(|t| t == tag) {
            self.tags.push(tag.to_owned());
        }
        self.tag_input.clear();
    }

    /// Remove `tag` from the draft. Removing an absent tag is a no-op.
    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Remove the most recently attached tag, if any.
    pub fn pop_tag(&mut self) {
        self.tags.pop();
    }

    /// Validate the draft and, when clean, mark it submitting and return the
    /// trimmed payload for the save request.
    ///
    /// Returns `None` while already submitting or when validation fails; in
    /// the latter case `errors` is populated and the form stays open.
    pub fn submission(&mut self) -> Option<QnaPayload> {
        if self.submitting {
            return None;
        }

        let mut errors = FieldErrors::default();
        if self.question.trim().is_empty() {
            errors.question = Some("question is required".to_owned());
        }
        if self.answer.trim().is_empty() {
            errors.answer = Some("answer is required".to_owned());
        }
        self.errors = errors;
        if !self.errors.is_empty() {
            return None;
        }

        // Attach any half-typed tag rather than dropping it on submit.
        self.add_tag();

        self.submitting = true;
        Some(QnaPayload {
            question: self.question.trim().to_owned(),
            answer: self.answer.trim().to_owned(),
            category: self.category().to_owned(),
            tags: self.tags.clone(),
        })
    }
}

#[cfg(test)]
#[path = "qna_form_tests.rs"]
mod tests;
