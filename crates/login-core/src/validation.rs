//! Input Validation
//!
//! Synchronous checks run before any request leaves the form.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// `local@domain.tld`, no whitespace and a single `@`.
/// U+FEFF is excluded alongside `\s` since Unicode does not class it as whitespace.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email pattern is valid")
});

/// Form input a validation error belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

/// Field-level validation failure; the Display text is what the form shows
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Password should not be empty.")]
    EmptyPassword,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::InvalidEmail => Field::Email,
            ValidationError::EmptyPassword => Field::Password,
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate both fields, stopping at the first failure (email first)
pub fn validate(email: &str, password: &str) -> Result<(), ValidationError> {
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    Ok(())
}
