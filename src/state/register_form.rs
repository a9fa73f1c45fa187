//! Add-user form state for the accounts tab.

use crate::model::{RegisterPayload, Role};

/// Which register field receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    /// The display name line.
    Name,
    /// The email line.
    Email,
    /// The password line (rendered masked).
    Password,
    /// The role selector.
    Role,
}

impl RegisterField {
    /// The field after this one in tab order, wrapping.
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Password,
            Self::Password => Self::Role,
            Self::Role => Self::Name,
        }
    }

    /// The field before this one in tab order, wrapping.
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Role,
            Self::Email => Self::Name,
            Self::Password => Self::Email,
            Self::Role => Self::Password,
        }
    }
}

/// Draft state for creating one account.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    /// Display name draft.
    pub name: String,
    /// Email draft.
    pub email: String,
    /// Password draft.
    pub password: String,
    /// Role to assign.
    pub role: Role,
    /// Validation message from the last failed submit.
    pub error: Option<String>,
    /// Set once the payload is handed off; blocks re-submission.
    pub submitting: bool,
    /// Field receiving input.
    pub focus: RegisterField,
}

impl RegisterForm {
    /// A blank draft defaulting to the staff role.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::Staff,
            error: None,
            submitting: false,
            focus: RegisterField::Name,
        }
    }

    /// Flip between the two roles.
    pub fn toggle_role(&mut self) {
        self.role = match self.role {
            Role::Admin => Role::Staff,
            Role::Staff => Role::Admin,
        };
    }

    /// Validate and return the registration payload.
    ///
    /// Name, email, and password must all be non-blank after trimming.
    /// Returns `None` while already submitting or on validation failure.
    pub fn submission(&mut self) -> Option<RegisterPayload> {
        if self.submitting {
            return None;
        }
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.password.is_empty() {
            self.error = Some("name, email, and password are required".to_owned());
            return None;
        }
        self.error = None;
        self.submitting = true;
        Some(RegisterPayload {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            role: self.role,
        })
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}
