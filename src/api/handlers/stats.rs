//! Handler for single link statistics.

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::api::middleware::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click count of a specific short link.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// Any authenticated user may read any link's statistics.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.stats_service.get_by_code(&code, user.id).await?;

    Ok(Json(StatsResponse::from(link)))
}
