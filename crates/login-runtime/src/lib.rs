//! # login-runtime
//!
//! Transport implementations of `login_core::AuthClient`.
//!
//! ## Clients
//!
//! - **HTTP** (default): JSON `POST` via `reqwest`, native or browser fetch
//!
//! ## Usage
//!
//! ```rust,ignore
//! use login_runtime::{AuthConfig, HttpAuthClient};
//!
//! let client = HttpAuthClient::new(AuthConfig::from_env());
//! let outcome = form.submit(&client).await;
//! ```

pub mod config;

#[cfg(feature = "http")]
pub mod http;

pub use config::AuthConfig;

#[cfg(feature = "http")]
pub use http::HttpAuthClient;

// Re-export core types for convenience
pub use login_core::{
    AuthClient, Credentials, FormErrors, LoginError, LoginForm, LoginResponse, Result,
    SubmitOutcome,
};
