//! Error Types

use thiserror::Error;

/// Result type alias for login submissions
pub type Result<T> = std::result::Result<T, LoginError>;

/// Shown when the server rejects a login without a usable message
pub const GENERIC_FAILURE_MESSAGE: &str = "Login failed, something went wrong.";

/// Why a submitted login did not succeed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// Server answered with a non-2xx status
    #[error("{}", rejection_text(.message))]
    Rejected { status: u16, message: String },

    /// Request went out but nothing came back (connect failure, timeout, reset)
    #[error("Login failed: No response from server")]
    NoResponse(String),

    /// Request could not be built or handed to the transport
    #[error("Login failed: {0}")]
    Request(String),
}

impl LoginError {
    /// Build a rejection from the server's `message` field, if it sent one
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        let message = message.map(|m| m.trim().to_string()).unwrap_or_default();
        LoginError::Rejected { status, message }
    }

    /// Check if a fresh attempt could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, LoginError::NoResponse(_))
    }

    /// Text for the form-level error region
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

fn rejection_text(message: &str) -> String {
    if message.is_empty() {
        GENERIC_FAILURE_MESSAGE.into()
    } else {
        format!("Login failed: {message}")
    }
}
