//! Endpoint Configuration

use serde::{Deserialize, Serialize};

/// Endpoint used when nothing overrides it
pub const DEFAULT_ENDPOINT: &str = "https://www.sample.app/login";

/// Environment variable overriding the endpoint
pub const ENDPOINT_ENV: &str = "LOGIN_ENDPOINT";

/// Where and how login requests are sent
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Absolute URL receiving the credential `POST`
    pub endpoint: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
        }
    }
}

impl AuthConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Default config, with `LOGIN_ENDPOINT` taking precedence when set.
    /// In the browser there is no process environment, so this is the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        lookup(ENDPOINT_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map_or_else(Self::default, Self::new)
    }
}
