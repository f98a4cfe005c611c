//! Mock Auth Client
//!
//! For testing and demo purposes. Replays a scripted outcome and records
//! every payload it is asked to send.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::{AuthClient, LoginResponse};
use crate::error::{LoginError, Result};
use crate::form::Credentials;

const MOCK_ENDPOINT: &str = "mock://login";

#[derive(Clone, Debug)]
enum Behavior {
    Settle(Result<LoginResponse>),
    Pending,
}

/// Scripted `AuthClient`
pub struct MockAuthClient {
    behavior: Behavior,
    calls: Mutex<Vec<Credentials>>,
}

impl MockAuthClient {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every login succeeds with `200 {"ok": true}`
    pub fn succeed() -> Self {
        Self::respond(LoginResponse::new(200, serde_json::json!({ "ok": true })))
    }

    pub fn respond(response: LoginResponse) -> Self {
        Self::with_behavior(Behavior::Settle(Ok(response)))
    }

    pub fn fail(error: LoginError) -> Self {
        Self::with_behavior(Behavior::Settle(Err(error)))
    }

    /// Server answers `status` with `{"message": message}`
    pub fn reject(status: u16, message: impl Into<String>) -> Self {
        Self::fail(LoginError::rejected(status, Some(message.into())))
    }

    pub fn no_response() -> Self {
        Self::fail(LoginError::NoResponse("connection refused".into()))
    }

    pub fn request_error(description: impl Into<String>) -> Self {
        Self::fail(LoginError::Request(description.into()))
    }

    /// Never settles (for exercising cancellation)
    pub fn pending() -> Self {
        Self::with_behavior(Behavior::Pending)
    }

    /// Payloads received so far, oldest first
    pub fn calls(&self) -> Vec<Credentials> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AuthClient for MockAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(credentials.clone());
        }

        match &self.behavior {
            Behavior::Settle(result) => result.clone(),
            Behavior::Pending => std::future::pending().await,
        }
    }

    fn endpoint(&self) -> &str {
        MOCK_ENDPOINT
    }
}
