//! API Client

use login_core::{AuthClient, Credentials, LoginResponse, Result};
use login_runtime::HttpAuthClient;

/// Send the credentials to the login endpoint
pub async fn login(credentials: &Credentials) -> Result<LoginResponse> {
    HttpAuthClient::from_env().login(credentials).await
}

/// Browser console line for a settled successful login
pub fn success_message(response: &LoginResponse) -> String {
    format!("Login successful: {}", response.body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_message_includes_body() {
        let response = LoginResponse::new(200, serde_json::json!({ "token": "abc" }));
        assert_eq!(success_message(&response), r#"Login successful: {"token":"abc"}"#);
    }

    #[test]
    fn test_success_message_plain_text_body() {
        let response = LoginResponse::new(200, serde_json::json!("welcome"));
        assert_eq!(success_message(&response), r#"Login successful: "welcome""#);
    }
}
