//! HTTP middleware for request processing and protection.
//!
//! Provides authentication, rate limiting, CORS, security headers and
//! observability middleware.

pub mod auth;
pub mod cors;
pub mod rate_limit;
pub mod security_headers;
pub mod tracing;

pub use auth::AuthUser;
