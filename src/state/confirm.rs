//! Delete confirmation state machine.
//!
//! `closed -> confirming(target) -> deleting(target) -> closed`. Once the
//! delete request is in flight both confirm and cancel are refused, so a
//! single keypress sequence can never fire the request twice or cancel a
//! request already on the wire.

/// What a pending delete points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    /// A Q&A record.
    Qna {
        /// Backend id.
        id: u64,
        /// Short label shown in the confirmation prompt.
        preview: String,
    },
    /// A note.
    Note {
        /// Backend id.
        id: String,
        /// Short label shown in the confirmation prompt.
        preview: String,
    },
    /// A user account.
    Account {
        /// Backend id.
        id: u64,
        /// Short label shown in the confirmation prompt.
        preview: String,
    },
}

impl DeleteTarget {
    /// The label shown in the confirmation prompt.
    pub fn preview(&self) -> &str {
        match self {
            Self::Qna { preview, .. } | Self::Note { preview, .. } | Self::Account { preview, .. } => {
                preview
            }
        }
    }

    /// The kind of thing being deleted, for the prompt title.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Qna { .. } => "Q&A entry",
            Self::Note { .. } => "note",
            Self::Account { .. } => "account",
        }
    }
}

/// The confirmation flow state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfirmState {
    /// No delete in progress.
    #[default]
    Closed,
    /// Prompt shown, awaiting confirm or cancel.
    Confirming(DeleteTarget),
    /// Request in flight; confirm and cancel are refused.
    Deleting(DeleteTarget),
}

impl ConfirmState {
    /// Open the prompt for `target`. Refused while a delete is in flight.
    pub fn open(&mut self, target: DeleteTarget) {
        if !matches!(self, Self::Deleting(_)) {
            *self = Self::Confirming(target);
        }
    }

    /// Confirm the pending delete.
    ///
    /// Returns the target to issue the request for, or `None` when there is
    /// nothing to confirm or a request is already in flight.
    pub fn confirm(&mut self) -> Option<DeleteTarget> {
        match std::mem::take(self) {
            Self::Confirming(target) => {
                *self = Self::Deleting(target.clone());
                Some(target)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    /// Dismiss the prompt. Ignored while a request is in flight.
    pub fn cancel(&mut self) {
        if matches!(self, Self::Confirming(_)) {
            *self = Self::Closed;
        }
    }

    /// Close the flow once the request completed, success or failure.
    pub fn finish(&mut self) {
        *self = Self::Closed;
    }

    /// Whether the prompt (or in-flight spinner) should render.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Whether the request is in flight.
    pub fn is_deleting(&self) -> bool {
        matches!(self, Self::Deleting(_))
    }

    /// The current target, if any.
    pub fn target(&self) -> Option<&DeleteTarget> {
        match self {
            Self::Closed => None,
            Self::Confirming(target) | Self::Deleting(target) => Some(target),
        }
    }
}

#[cfg(test)]
#[path = "confirm_tests.rs"]
mod tests;
