//! API route configuration.
//!
//! Routes are split by access: [`public_routes`] are open, while
//! [`protected_routes`] require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    health_handler, login_handler, redirect_handler, register_handler, shorten_handler,
    stats_handler, stats_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes reachable without a token.
///
/// # Endpoints
///
/// - `POST /auth/register` - Create an account
/// - `POST /auth/login`    - Exchange credentials for a token
/// - `GET  /r/{code}`      - Redirect to the original URL and count the click
/// - `GET  /health`        - Liveness and database check
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .route("/r/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
}

/// Routes that require a valid Bearer token.
///
/// # Endpoints
///
/// - `POST /shorten`      - Shorten a URL
/// - `GET  /stats`        - List the caller's links
/// - `GET  /stats/{code}` - Click count of a single link
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats", get(stats_list_handler))
        .route("/stats/{code}", get(stats_handler))
}
