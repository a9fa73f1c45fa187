//! Login form state.
//!
//! Session mechanics live in the backend; this form only collects
//! credentials and tracks the in-flight submit. Failed logins surface the
//! backend's message and leave the fields intact for another attempt.

/// Which credential field receives text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    /// The email line.
    Email,
    /// The password line (rendered masked).
    Password,
}

impl LoginField {
    /// The other field.
    pub fn toggle(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::Email,
        }
    }
}

/// Credential entry state.
#[derive(Debug, Clone)]
pub struct LoginForm {
    /// Email draft text.
    pub email: String,
    /// Password draft text.
    pub password: String,
    /// Set once credentials are handed off; blocks re-submission.
    pub submitting: bool,
    /// Message from a failed attempt.
    pub error: Option<String>,
    /// Field receiving input.
    pub focus: LoginField,
}

impl LoginForm {
    /// A blank form.
    pub fn new() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            submitting: false,
            error: None,
            focus: LoginField::Email,
        }
    }

    /// Validate and return `(email, password)` for the login request.
    ///
    /// Both fields must be non-blank. Returns `None` while already
    /// submitting or on validation failure.
    pub fn submission(&mut self) -> Option<(String, String)> {
        if self.submitting {
            return None;
        }
        if self.email.trim().is_empty() || self.password.is_empty() {
            self.error = Some("email and password are required".to_owned());
            return None;
        }
        self.error = None;
        self.submitting = true;
        Some((self.email.trim().to_owned(), self.password.clone()))
    }

    /// Record a failed attempt, reopening the form for editing.
    pub fn fail(&mut self, message: String) {
        self.submitting = false;
        self.password.clear();
        self.error = Some(message);
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::LoginForm;

    #[test]
    fn blank_credentials_are_rejected() {
        let mut form = LoginForm::new();
        form.email = "admin@example.com".to_owned();
        assert!(form.submission().is_none());
        assert!(form.error.is_some());
    }

    #[test]
    fn submit_trims_email_and_blocks_while_in_flight() {
        let mut form = LoginForm::new();
        form.email = " admin@example.com ".to_owned();
        form.password = "hunter2".to_owned();

        let (email, password) = form.submission().expect("credentials present");
        assert_eq!(email, "admin@example.com");
        assert_eq!(password, "hunter2");
        assert!(form.submission().is_none());
    }

    #[test]
    fn failure_clears_password_and_reopens_the_form() {
        let mut form = LoginForm::new();
        form.email = "admin@example.com".to_owned();
        form.password = "wrong".to_owned();
        form.submission();

        form.fail("invalid credentials".to_owned());
        assert!(!form.submitting);
        assert!(form.password.is_empty());
        assert_eq!(form.error.as_deref(), Some("invalid credentials"));
        assert_eq!(form.email, "admin@example.com");
    }
}
