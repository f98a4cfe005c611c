//! # login-core
//!
//! State container and submission flow for a single email/password login form.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       LoginForm                          │
//! │  ┌─────────────┐  ┌──────────────┐  ┌─────────────────┐  │
//! │  │ Credentials │  │  Validation  │  │   AuthClient    │  │
//! │  │ FormErrors  │──│  (sync, pre- │──│   (Strategy)    │  │
//! │  │ submitting  │  │   network)   │  │                 │  │
//! │  └─────────────┘  └──────────────┘  └─────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The `AuthClient` trait keeps the controller free of I/O: the HTTP
//! implementation lives in `login-runtime`, and `MockAuthClient` drives tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use login_core::{LoginForm, SubmitOutcome};
//!
//! let mut form = LoginForm::new();
//! form.set_email("a@b.co");
//! form.set_password("hunter2");
//!
//! match form.submit(&client).await {
//!     SubmitOutcome::Succeeded(response) => { /* ... */ }
//!     _ => println!("{}", form.errors().form),
//! }
//! ```

pub mod client;
pub mod error;
pub mod form;
pub mod mock;
pub mod validation;

pub use client::{AuthClient, LoginResponse};
pub use error::{LoginError, Result};
pub use form::{Credentials, FormErrors, LoginForm, SubmitOutcome};
pub use mock::MockAuthClient;
pub use validation::{Field, ValidationError};
