//! HTTP client for the barber scheduling API
//!
//! Thin JSON client over the service's REST endpoints. Payload shapes are
//! fixed by the server; every non-2xx response surfaces as `ApiError`.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default API address
const DEFAULT_ADDRESS: &str = "http://127.0.0.1:3333";

/// Errors produced by API calls
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (connect, timeout, body read)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status
    #[error("server returned status {0}")]
    Status(StatusCode),
    /// The reset link did not carry a token
    #[error("reset token is missing")]
    MissingResetToken,
}

/// Signed-in account data returned by the sessions endpoint
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    user: SessionUser,
}

#[derive(Debug, Serialize)]
struct CreateUserRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateSessionRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct ForgotPasswordRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct ResetPasswordRequest<'a> {
    password: &'a str,
    password_confirmation: &'a str,
    token: &'a str,
}

/// Client for the barber scheduling API
pub struct ApiClient {
    http: reqwest::Client,
    address: String,
}

impl ApiClient {
    /// Create a new API client, address taken from `BARBER_API_URL` when set
    pub fn new() -> Self {
        let address =
            std::env::var("BARBER_API_URL").unwrap_or_else(|_| DEFAULT_ADDRESS.to_string());
        Self::with_address(address)
    }

    /// Create a client pointed at an explicit address
    pub fn with_address(address: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            address: address.into(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}", self.address, path);
        tracing::debug!(%url, "POST");
        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "API call rejected");
            return Err(ApiError::Status(status));
        }
        Ok(response)
    }

    /// Register a new account
    pub async fn create_user(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        self.post(
            "/users",
            &CreateUserRequest {
                name,
                email,
                password,
            },
        )
        .await?;
        Ok(())
    }

    /// Authenticate and open a session
    pub async fn create_session(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<SessionUser, ApiError> {
        let response = self
            .post("/sessions", &CreateSessionRequest { email, password })
            .await?;
        let session: SessionResponse = response.json().await?;
        Ok(session.user)
    }

    /// Request a password-recovery e-mail
    pub async fn forgot_password(&mut self, email: &str) -> Result<(), ApiError> {
        self.post("/password/forgot", &ForgotPasswordRequest { email })
            .await?;
        Ok(())
    }

    /// Set a new password using the token from the recovery e-mail
    pub async fn reset_password(
        &mut self,
        password: &str,
        password_confirmation: &str,
        token: &str,
    ) -> Result<(), ApiError> {
        self.post(
            "/password/reset",
            &ResetPasswordRequest {
                password,
                password_confirmation,
                token,
            },
        )
        .await?;
        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_address_keeps_address() {
        let client = ApiClient::with_address("http://api.test:3333");
        assert_eq!(client.address(), "http://api.test:3333");
    }

    #[test]
    fn test_request_bodies_serialize_with_api_field_names() {
        let body = ResetPasswordRequest {
            password: "secret",
            password_confirmation: "secret",
            token: "abc",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["password"], "secret");
        assert_eq!(json["password_confirmation"], "secret");
        assert_eq!(json["token"], "abc");
    }

    #[test]
    fn test_session_response_deserializes_user() {
        let json = r#"{"user":{"id":"u1","name":"Ada","email":"ada@example.com"},"token":"jwt"}"#;
        let parsed: SessionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.user.name, "Ada");
        assert_eq!(parsed.user.email, "ada@example.com");
    }

    #[test]
    fn test_missing_token_error_message() {
        let err = ApiError::MissingResetToken;
        assert_eq!(err.to_string(), "reset token is missing");
    }
}
