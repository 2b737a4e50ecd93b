//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /auth/register`, `POST /auth/login` - Account endpoints (public)
//! - `GET  /r/{code}`    - Short link redirect (public)
//! - `GET  /health`      - Health check (public)
//! - `POST /shorten`, `GET /stats`, `GET /stats/{code}` - Bearer token required
//!
//! # Middleware (outermost first)
//!
//! - **Tracing** - Structured request/response logging
//! - **Security headers** - Hardening headers on every response
//! - **CORS** - Restricted to configured origins
//! - **Rate limiting** - Per-client token bucket (configurable for proxy deployments)
//! - **Authentication** - Bearer token, protected routes only

use crate::api;
use crate::api::middleware::{auth, cors, rate_limit, security_headers, tracing};
use crate::config::Config;
use crate::state::AppState;
use anyhow::Result;
use axum::{Router, middleware};
use tower_governor::key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `config` - supplies CORS origins, the rate limit quota and
///   `behind_proxy`: when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
///
/// The peer-address limiter needs `ConnectInfo<SocketAddr>`, so the router
/// must be served with `into_make_service_with_connect_info`.
///
/// # Errors
///
/// Returns an error if a CORS origin or the rate limit quota is invalid.
pub fn app_router(state: AppState, config: &Config) -> Result<Router> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let router = Router::new()
        .merge(api::routes::public_routes())
        .merge(protected)
        .with_state(state);

    let router = if config.behind_proxy {
        router.layer(rate_limit::layer(
            SmartIpKeyExtractor,
            config.rate_limit_per_minute,
        )?)
    } else {
        router.layer(rate_limit::layer(
            PeerIpKeyExtractor,
            config.rate_limit_per_minute,
        )?)
    };

    let router = router.layer(cors::layer(&config.cors_origins)?);

    Ok(security_headers::apply(router).layer(tracing::layer()))
}
