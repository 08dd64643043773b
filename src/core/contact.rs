//! Contact form fields and the validation rules the browser enforces
//!
//! The form itself is posted natively to the hosting platform. These types
//! mirror the `required`, `pattern` and `type="email"` constraints on its
//! inputs so the submit handler can flag anything the browser let through.

/// Field names as posted to the form backend
pub mod fields {
    pub const FORM_NAME: &str = "form-name";
    pub const HONEYPOT: &str = "bot-field";
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const MESSAGE: &str = "message";
}

/// `pattern` for the name input: at least one non-whitespace character, which
/// `required` alone does not enforce
pub const NAME_PATTERN: &str = r".*\S.*";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please tell me your name")]
    MissingName,

    #[error("Please enter your email")]
    MissingEmail,

    #[error("'{0}' doesn't look like an email address")]
    InvalidEmail(String),
}

impl ContactError {
    /// Name of the form field the error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            ContactError::MissingName => fields::NAME,
            ContactError::MissingEmail | ContactError::InvalidEmail(_) => fields::EMAIL,
        }
    }
}

/// Values typed into the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    /// Free-text project details, optional
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Check the submission against the same rules as the form's inputs.
    ///
    /// Fields are checked in form order, so the first error is the one the
    /// browser would highlight.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }
}

/// Basic email shape check, roughly what `<input type="email">` accepts:
/// a non-empty local part, one `@`, and a domain made of non-empty labels.
pub fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    domain.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}
