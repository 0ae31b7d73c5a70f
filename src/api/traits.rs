//! Trait abstraction for the API client to enable mocking in tests

use async_trait::async_trait;

use super::client::{ApiError, SessionUser};

/// Trait for API client operations, enabling mocking in tests
#[allow(dead_code)]
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClientTrait: Send + Sync {
    /// Register a new account
    async fn create_user(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError>;

    /// Authenticate and open a session
    async fn create_session(&mut self, email: &str, password: &str)
        -> Result<SessionUser, ApiError>;

    /// Request a password-recovery e-mail
    async fn forgot_password(&mut self, email: &str) -> Result<(), ApiError>;

    /// Set a new password using the token from the recovery e-mail
    async fn reset_password(
        &mut self,
        password: &str,
        password_confirmation: &str,
        token: &str,
    ) -> Result<(), ApiError>;
}
