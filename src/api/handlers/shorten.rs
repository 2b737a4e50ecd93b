//! Handler for link shortening.

use axum::{Extension, Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::ValidatedJson;
use crate::api::middleware::AuthUser;
use crate::application::services::ShortenOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Message returned when the URL had already been shortened.
pub const ALREADY_EXISTS: &str = "Link already exists";

/// Shortens a URL on behalf of the authenticated user.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Deduplication
///
/// URLs are unique across all users. Shortening a URL that is already stored
/// returns the existing short URL with `"message": "Link already exists"`,
/// regardless of who created it.
///
/// # Response
///
/// ```json
/// { "shortUrl": "http://localhost:3333/r/3fa9c01b" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing, malformed or too long.
/// Returns 401 Unauthorized without a valid token.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidatedJson(payload): ValidatedJson<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let outcome = state.link_service.shorten(&payload.url, user.id).await?;

    let message = match outcome {
        ShortenOutcome::Created(_) => None,
        ShortenOutcome::Existing(_) => Some(ALREADY_EXISTS.to_string()),
    };

    Ok(Json(ShortenResponse {
        short_url: state.link_service.short_url(&outcome.link().code),
        message,
    }))
}
