//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /r/{code}`
///
/// # Click Counting
///
/// The click is recorded with a single atomic increment in the store before
/// the redirect is sent, so concurrent hits are never lost.
///
/// # Response
///
/// `302 Found` with the original URL in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original = state.link_service.resolve(&code).await?;

    tracing::debug!(code = %code, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, original)]))
}
