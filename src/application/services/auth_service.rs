//! Account registration, credential checks and bearer token verification.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::infrastructure::security::password::{hash_password, verify_password};
use crate::infrastructure::security::{Claims, TokenService};
use serde_json::json;
use tracing::{info, warn};
use validator::ValidateEmail;

/// Message shared by every credential failure so callers cannot probe for emails.
pub const INVALID_CREDENTIALS: &str = "Credentials not valid!";

/// Shortest accepted password, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Service for user registration and authentication.
///
/// Password hashing runs on the blocking thread pool so a slow Argon2 round
/// never stalls unrelated requests.
pub struct AuthService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R: UserRepository + ?Sized> AuthService<R> {
    /// Creates a new authentication service.
    pub fn new(repository: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repository, tokens }
    }

    /// Registers a new user.
    ///
    /// Applies the same input rules as `RegisterRequest`, for callers that
    /// bypass the HTTP layer such as the admin CLI.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email is malformed or the
    /// password is shorter than [`MIN_PASSWORD_LENGTH`].
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] if hashing or the store fails.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, AppError> {
        check_registration(email, password)?;

        if self.repository.find_by_email(email).await?.is_some() {
            warn!(event = "register_conflict", "Registration for existing email rejected");
            return Err(AppError::conflict("User already exists", json!({})));
        }

        let password = password.to_owned();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await?
            .map_err(|e| {
                AppError::internal("Failed to hash password", json!({ "reason": e.to_string() }))
            })?;

        let user = self
            .repository
            .create(NewUser {
                email: email.to_string(),
                password_hash,
            })
            .await?;

        info!(event = "user_registered", user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Checks credentials and issues a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with [`INVALID_CREDENTIALS`] if the
    /// email is unknown or the password does not match.
    /// Returns [`AppError::Internal`] on store, hashing or signing failures.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let Some(user) = self.repository.find_by_email(email).await? else {
            warn!(event = "login_failed", "Login failed: unknown email");
            return Err(invalid_credentials());
        };

        let password = password.to_owned();
        let stored_hash = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
            .await?
            .map_err(|e| {
                AppError::internal(
                    "Stored password hash is invalid",
                    json!({ "reason": e.to_string() }),
                )
            })?;

        if !matches {
            warn!(event = "login_failed", user_id = %user.id, "Login failed: wrong password");
            return Err(invalid_credentials());
        }

        let token = self.tokens.issue(user.id, &user.email).map_err(|e| {
            AppError::internal("Failed to issue token", json!({ "reason": e.to_string() }))
        })?;

        info!(event = "login_succeeded", user_id = %user.id, "Token issued");
        Ok(token)
    }

    /// Verifies a raw bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, badly
    /// signed or expired.
    pub fn authenticate(&self, token: &str) -> Result<Claims, AppError> {
        self.tokens.verify(token).map_err(|e| {
            AppError::unauthorized("Unauthorized", json!({ "reason": e.to_string() }))
        })
    }
}

/// Mirrors the `RegisterRequest` rules and reports failures in the same shape.
fn check_registration(email: &str, password: &str) -> Result<(), AppError> {
    let mut fields = serde_json::Map::new();

    if !email.validate_email() {
        fields.insert("email".to_string(), json!(["E-mail not valid!"]));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        fields.insert(
            "password".to_string(),
            json!(["Password must have at least 6 characters"]),
        );
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(AppError::bad_request(
            "Validation error",
            json!({ "fields": fields }),
        ))
    }
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized(INVALID_CREDENTIALS, serde_json::Value::Null)
}
