//! Login Form Controller
//!
//! Plain mutable state for the two inputs, the inline errors and the loading
//! flag, plus the submission flow that ties them to an [`AuthClient`].

use serde::{Deserialize, Serialize};

use crate::client::{AuthClient, LoginResponse};
use crate::error::{LoginError, Result};
use crate::validation::{self, Field, ValidationError};

/// Submit button text while idle
pub const SUBMIT_LABEL: &str = "Login";

/// Submit button text while a request is pending
pub const LOADING_LABEL: &str = "Loading ...";

/// Request payload, overwritten on every keystroke
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Inline error text; an empty string means no error
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub email: String,
    pub password: String,
    pub form: String,
}

impl FormErrors {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.password.is_empty() && self.form.is_empty()
    }

    fn set_field(&mut self, error: &ValidationError) {
        let slot = match error.field() {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        };
        *slot = error.to_string();
    }
}

/// What a call to [`LoginForm::submit`] ended with
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Another submission is still pending; nothing was changed
    InFlight,

    /// Validation failed; no request was sent
    Invalid(ValidationError),

    Succeeded(LoginResponse),

    Failed(LoginError),
}

impl From<Result<LoginResponse>> for SubmitOutcome {
    fn from(result: Result<LoginResponse>) -> Self {
        match result {
            Ok(response) => SubmitOutcome::Succeeded(response),
            Err(err) => SubmitOutcome::Failed(err),
        }
    }
}

/// The form's whole state
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    credentials: Credentials,
    errors: FormErrors,
    is_submitting: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.credentials.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.credentials.password = password.into();
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn email(&self) -> &str {
        &self.credentials.email
    }

    pub fn password(&self) -> &str {
        &self.credentials.password
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Both fields filled in. Deliberately weaker than [`validation::validate`]:
    /// a malformed email still enables the button and is caught on submit.
    pub fn can_submit(&self) -> bool {
        !self.credentials.email.is_empty() && !self.credentials.password.is_empty()
    }

    pub fn submit_disabled(&self) -> bool {
        self.is_submitting || !self.can_submit()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            LOADING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Start a submission attempt.
    ///
    /// Clears every error, validates, and marks the form as submitting.
    /// Returns the payload to send, or the outcome that stopped the attempt.
    /// Every `Ok` must be paired with a later [`finish_submit`](Self::finish_submit).
    pub fn begin_submit(&mut self) -> std::result::Result<Credentials, SubmitOutcome> {
        if self.is_submitting {
            return Err(SubmitOutcome::InFlight);
        }

        self.errors.clear();

        if let Err(err) = validation::validate(&self.credentials.email, &self.credentials.password) {
            tracing::debug!(field = ?err.field(), "Login form rejected: {}", err);
            self.errors.set_field(&err);
            return Err(SubmitOutcome::Invalid(err));
        }

        self.is_submitting = true;
        tracing::info!(email = %self.credentials.email, "Submitting login");

        Ok(self.credentials.clone())
    }

    /// Settle a submission started with [`begin_submit`](Self::begin_submit)
    pub fn finish_submit(&mut self, result: &Result<LoginResponse>) {
        self.record(result);
        self.is_submitting = false;
    }

    /// Validate, send, and settle in one call.
    ///
    /// The loading flag is cleared on every exit path, including this future
    /// being dropped before the client settles.
    pub async fn submit<C>(&mut self, client: &C) -> SubmitOutcome
    where
        C: AuthClient + ?Sized,
    {
        let credentials = match self.begin_submit() {
            Ok(credentials) => credentials,
            Err(outcome) => return outcome,
        };

        let guard = SubmittingGuard { form: self };
        let result = client.login(&credentials).await;
        guard.form.record(&result);
        drop(guard);

        result.into()
    }

    fn record(&mut self, result: &Result<LoginResponse>) {
        match result {
            Ok(response) => {
                tracing::info!(
                    email = %self.credentials.email,
                    status = response.status,
                    body = %response.body,
                    "Login successful"
                );
            }
            Err(err) => {
                tracing::warn!(email = %self.credentials.email, error = ?err, "Login failed");
                self.errors.form = err.user_message();
            }
        }
    }
}

/// Clears the loading flag when the submission scope ends, however it ends
struct SubmittingGuard<'a> {
    form: &'a mut LoginForm,
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.form.is_submitting = false;
    }
}
