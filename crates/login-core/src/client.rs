//! Authentication Transport
//!
//! The controller talks to the authentication endpoint only through
//! [`AuthClient`], so HTTP, mocks, or any other backend can be swapped in
//! without touching form logic.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::form::Credentials;

/// Settled successful login
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// HTTP status (any 2xx)
    pub status: u16,

    /// Response body; non-JSON bodies are kept as a JSON string
    pub body: serde_json::Value,
}

impl LoginResponse {
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }
}

/// Strategy trait for the outbound login call
///
/// Browser fetch futures are not `Send`, so the wasm32 build drops the bound.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AuthClient {
    /// POST the credentials and wait for settlement
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse>;

    /// Where requests are sent
    fn endpoint(&self) -> &str;
}
