//! Handler for the caller's link list.

use axum::{Extension, Json, extract::State};

use crate::api::dto::stats::{LinkItem, StatsListResponse};
use crate::api::middleware::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every link owned by the authenticated user, newest first.
///
/// # Endpoint
///
/// `GET /stats`
///
/// # Response
///
/// ```json
/// {
///   "links": [
///     {
///       "code": "3fa9c01b",
///       "original": "https://example.com",
///       "userId": "8d0c...",
///       "clicks": 4,
///       "createdAt": "2025-01-01T00:00:00Z"
///     }
///   ]
/// }
/// ```
pub async fn stats_list_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<StatsListResponse>, AppError> {
    let links = state.stats_service.list_for_user(user.id).await?;

    Ok(Json(StatsListResponse {
        links: links.into_iter().map(LinkItem::from).collect(),
    }))
}
