//! HTTP Auth Client
//!
//! Implementation of `AuthClient` over `reqwest`. Failures are sorted into
//! the three `LoginError` kinds the form knows how to display.

use async_trait::async_trait;
use login_core::{
    client::{AuthClient, LoginResponse},
    error::{LoginError, Result},
    form::Credentials,
};
use serde::Deserialize;

use crate::config::AuthConfig;

/// Error body the server is expected to send with a non-2xx status
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// `reqwest`-backed login client
pub struct HttpAuthClient {
    client: reqwest::Client,
    config: AuthConfig,
}

impl HttpAuthClient {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::new(AuthConfig::from_env())
    }

    /// Reuse an existing `reqwest` client (connection pool, proxies, ...)
    pub fn with_client(client: reqwest::Client, config: AuthConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}

impl Default for HttpAuthClient {
    fn default() -> Self {
        Self::new(AuthConfig::default())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AuthClient for HttpAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let url = reqwest::Url::parse(&self.config.endpoint)
            .map_err(|e| LoginError::Request(e.to_string()))?;

        tracing::debug!(endpoint = %url, "POST login");

        let response = self
            .client
            .post(url)
            .json(credentials)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();

        if status.is_success() {
            Ok(success_response(status.as_u16(), response.text().await))
        } else {
            let message = response.text().await.ok().and_then(|t| rejection_message(&t));
            Err(LoginError::rejected(status.as_u16(), message))
        }
    }

    fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

/// Builder errors never reached the wire; everything else did and got no answer
fn classify_send_error(err: reqwest::Error) -> LoginError {
    if err.is_builder() {
        LoginError::Request(err.to_string())
    } else {
        LoginError::NoResponse(err.to_string())
    }
}

/// Pull `message` out of an error body, if it is JSON and has one
fn rejection_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
}

/// A 2xx already settled the login; an unreadable body only loses the payload
fn success_response<E: std::fmt::Display>(
    status: u16,
    body: std::result::Result<String, E>,
) -> LoginResponse {
    match body {
        Ok(text) => LoginResponse::new(status, parse_body(&text)),
        Err(e) => {
            tracing::warn!(status, error = %e, "Login succeeded but the body could not be read");
            LoginResponse::new(status, serde_json::Value::Null)
        }
    }
}

fn parse_body(text: &str) -> serde_json::Value {
    if text.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::StatusCode, routing::post};
    use login_core::{LoginForm, SubmitOutcome, error::GENERIC_FAILURE_MESSAGE};
    use serde_json::json;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/login")
    }

    fn client_for(endpoint: String) -> HttpAuthClient {
        HttpAuthClient::new(AuthConfig::new(endpoint))
    }

    #[test]
    fn test_rejection_message_parsing() {
        assert_eq!(
            rejection_message(r#"{"message":"bad credentials"}"#),
            Some("bad credentials".into())
        );
        assert_eq!(rejection_message(r#"{"error":"nope"}"#), None);
        assert_eq!(rejection_message(r#"{"message":42}"#), None);
        assert_eq!(rejection_message("<html>502</html>"), None);
    }

    #[test]
    fn test_body_parsing() {
        assert_eq!(parse_body(r#"{"token":"t"}"#), json!({ "token": "t" }));
        assert_eq!(parse_body("welcome"), json!("welcome"));
        assert_eq!(parse_body(""), serde_json::Value::Null);
    }

    #[test]
    fn test_unreadable_success_body_keeps_success() {
        let response = success_response(200, Err::<String, _>("connection reset mid-body"));
        assert_eq!(response, LoginResponse::new(200, serde_json::Value::Null));

        let response = success_response::<String>(201, Ok(r#"{"token":"t"}"#.into()));
        assert_eq!(response.status, 201);
        assert_eq!(response.body, json!({ "token": "t" }));
    }

    #[tokio::test]
    async fn test_success_posts_json_payload() {
        let router = Router::new().route(
            "/login",
            post(|Json(body): Json<serde_json::Value>| async move {
                Json(json!({ "token": "abc", "echo": body }))
            }),
        );
        let client = client_for(serve(router).await);

        let response = client
            .login(&Credentials::new("a@b.co", "hunter2"))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body["token"], "abc");
        assert_eq!(
            response.body["echo"],
            json!({ "email": "a@b.co", "password": "hunter2" })
        );
    }

    #[tokio::test]
    async fn test_error_status_is_rejected() {
        let router = Router::new().route(
            "/login",
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "message": "bad credentials" })),
                )
            }),
        );
        let client = client_for(serve(router).await);

        let err = client
            .login(&Credentials::new("a@b.co", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            LoginError::Rejected {
                status: 401,
                message: "bad credentials".into()
            }
        );
    }

    #[tokio::test]
    async fn test_error_status_without_message() {
        let router = Router::new().route(
            "/login",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let client = client_for(serve(router).await);

        let err = client.login(&Credentials::default()).await.unwrap_err();

        assert!(matches!(err, LoginError::Rejected { status: 500, .. }));
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_closed_port_is_no_response() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{addr}/login"));
        let err = client.login(&Credentials::default()).await.unwrap_err();

        assert!(matches!(err, LoginError::NoResponse(_)));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_bad_endpoint_is_request_error() {
        let client = client_for("not a url".into());
        let err = client.login(&Credentials::default()).await.unwrap_err();

        assert!(matches!(err, LoginError::Request(_)));
        assert!(err.user_message().starts_with("Login failed: "));
    }

    #[tokio::test]
    async fn test_form_round_trip_over_http() {
        let router = Router::new().route(
            "/login",
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "message": "bad credentials" })),
                )
            }),
        );
        let client = client_for(serve(router).await);

        let mut form = LoginForm::new();
        form.set_email("a@b.co");
        form.set_password("wrong");
        let outcome = form.submit(&client).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(LoginError::Rejected { .. })));
        assert_eq!(form.errors().form, "Login failed: bad credentials");
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_endpoint_from_config() {
        let client = HttpAuthClient::default();
        assert_eq!(client.endpoint(), "https://www.sample.app/login");
        assert_eq!(client.config(), &AuthConfig::default());
    }
}
