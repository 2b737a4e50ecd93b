//! Handlers for account registration and login.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /auth/register`
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com", "password": "secret1" }
/// ```
///
/// # Response
///
/// `201 Created` with `{ "id", "email", "createdAt" }`. The password hash is
/// never returned.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is invalid or the email is taken.
pub async fn register_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let user = state
        .auth_service
        .register(&payload.email, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(RegisterResponse::from(user))))
}

/// Exchanges credentials for a bearer token.
///
/// # Endpoint
///
/// `POST /auth/login`
///
/// # Errors
///
/// Returns 400 Bad Request if the body is invalid.
/// Returns 401 Unauthorized if the email is unknown or the password is wrong;
/// both cases produce the same body.
pub async fn login_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let token = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse { token }))
}
