//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Registration, login and token verification
//! - [`services::link_service::LinkService`] - Short link creation and redirects
//! - [`services::stats_service::StatsService`] - Per-link click statistics

pub mod services;
