// SPDX-License-Identifier: MIT

//! Authentication service: sign up/in/out, password change and recovery.
//!
//! Failures on the credential paths are classified into [`AuthError`]
//! variants whose `Display` strings are the exact messages the UI renders
//! inline; nothing on this surface panics or leaks a raw error dump.

use crate::backend::{execute_with_retry, Account, BackendClient};
use crate::config::Config;
use crate::error::{AppError, Result};

/// User-facing authentication errors. `Display` is the message shown in
/// the UI.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Current password is incorrect. Please try again.")]
    IncorrectCurrentPassword,

    #[error("This password was recently used. Please choose a different password.")]
    PasswordRecentlyUsed,

    #[error("Password cannot contain personal information. Please choose a different password.")]
    PasswordContainsPersonalData,

    #[error("No account found with this email address.")]
    UserNotFound,

    #[error("Invalid or expired verification code. Please request a new one.")]
    InvalidRecoveryToken,

    #[error("Too many requests. Please wait a moment before trying again.")]
    RateLimited,

    #[error("{0}")]
    Other(String),
}

impl AuthError {
    fn other(err: &AppError, fallback: &str) -> Self {
        match err {
            AppError::Api { message, .. } if !message.is_empty() => {
                AuthError::Other(message.clone())
            }
            _ => AuthError::Other(fallback.to_string()),
        }
    }
}

/// Authentication operations against the hosted backend.
#[derive(Clone)]
pub struct AuthService {
    client: BackendClient,
    recovery_url: String,
}

impl AuthService {
    pub fn new(client: BackendClient, config: &Config) -> Self {
        Self {
            client,
            recovery_url: config.recovery_url.clone(),
        }
    }

    /// The signed-in account, or `None` when no session is active.
    ///
    /// Missing-scope / unauthorized responses are the backend's way of
    /// saying "nobody is signed in"; they are not surfaced as errors.
    pub async fn current_user(&self) -> Result<Option<Account>> {
        match execute_with_retry(|| self.client.get_account()).await {
            Ok(account) => Ok(Some(account)),
            Err(err) if err.is_unauthorized() => {
                tracing::debug!("No active session");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Create an account, then sign in with the same credentials.
    pub async fn sign_up(&self, email: &str, password: &str) -> std::result::Result<Account, AuthError> {
        execute_with_retry(|| self.client.create_account(email, password))
            .await
            .map_err(|err| {
                if err.is_rate_limit() {
                    AuthError::RateLimited
                } else {
                    AuthError::other(&err, "An unknown error occurred during sign up")
                }
            })?;

        self.sign_in(email, password).await
    }

    /// Create an email/password session and fetch the account.
    pub async fn sign_in(&self, email: &str, password: &str) -> std::result::Result<Account, AuthError> {
        execute_with_retry(|| self.client.create_email_session(email, password))
            .await
            .map_err(|err| {
                if err.is_rate_limit() {
                    AuthError::RateLimited
                } else {
                    AuthError::other(&err, "An unknown error occurred during sign in")
                }
            })?;

        execute_with_retry(|| self.client.get_account())
            .await
            .map_err(|err| AuthError::other(&err, "An unknown error occurred during sign in"))
    }

    /// End the current session. Errors are swallowed: if the backend says
    /// there is no session to delete, the intent (being signed out) is
    /// already satisfied.
    pub async fn sign_out(&self) {
        match execute_with_retry(|| self.client.delete_session()).await {
            Ok(()) => {}
            Err(err) if err.is_unauthorized() => {
                tracing::debug!("No active session to delete");
            }
            Err(err) => {
                tracing::error!(error = %err, "Error signing out");
            }
        }
    }

    /// Change the account password, verifying the current one.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> std::result::Result<(), AuthError> {
        execute_with_retry(|| self.client.update_password(new_password, current_password))
            .await
            .map_err(|err| {
                let kind = err.api_kind().unwrap_or("");
                if kind.contains("user_invalid_credentials") || err.api_code() == Some(401) {
                    AuthError::IncorrectCurrentPassword
                } else if kind.contains("password_recently_used") {
                    AuthError::PasswordRecentlyUsed
                } else if kind.contains("password_personal_data") {
                    AuthError::PasswordContainsPersonalData
                } else if err.is_rate_limit() {
                    AuthError::RateLimited
                } else {
                    AuthError::other(&err, "An unknown error occurred while changing password")
                }
            })
    }

    /// Send a password-recovery email with a one-time secret.
    pub async fn request_password_reset(&self, email: &str) -> std::result::Result<(), AuthError> {
        execute_with_retry(|| self.client.create_recovery(email, &self.recovery_url))
            .await
            .map_err(|err| {
                let kind = err.api_kind().unwrap_or("");
                if kind.contains("user_not_found") || err.api_code() == Some(404) {
                    AuthError::UserNotFound
                } else if err.is_rate_limit() {
                    AuthError::RateLimited
                } else {
                    AuthError::other(&err, "An unknown error occurred while sending verification code")
                }
            })
    }

    /// Complete password recovery with the emailed user id and secret.
    pub async fn reset_password(
        &self,
        user_id: &str,
        secret: &str,
        new_password: &str,
    ) -> std::result::Result<(), AuthError> {
        execute_with_retry(|| self.client.update_recovery(user_id, secret, new_password))
            .await
            .map_err(|err| {
                let kind = err.api_kind().unwrap_or("");
                if kind.contains("user_invalid_token")
                    || kind.contains("user_token_expired")
                    || err.api_code() == Some(401)
                {
                    AuthError::InvalidRecoveryToken
                } else if kind.contains("password_recently_used") {
                    AuthError::PasswordRecentlyUsed
                } else if err.is_rate_limit() {
                    AuthError::RateLimited
                } else {
                    AuthError::other(&err, "An unknown error occurred while resetting password")
                }
            })
    }
}
