//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, LinkService, StatsService};
use crate::domain::repositories::{LinkRepository, UserRepository};
use crate::infrastructure::persistence::{PgLinkRepository, PgUserRepository};
use crate::infrastructure::security::TokenService;

/// Services behind trait-object repositories so that tests can swap the store.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<dyn UserRepository>>,
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    pub stats_service: Arc<StatsService<dyn LinkRepository>>,
}

impl AppState {
    /// Wires services on top of the given repositories.
    pub fn new(
        users: Arc<dyn UserRepository>,
        links: Arc<dyn LinkRepository>,
        tokens: Arc<TokenService>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(users, tokens)),
            link_service: Arc::new(LinkService::new(links.clone(), base_url)),
            stats_service: Arc::new(StatsService::new(links)),
        }
    }

    /// Wires services on top of PostgreSQL repositories.
    pub fn with_pool(
        pool: Arc<PgPool>,
        tokens: Arc<TokenService>,
        base_url: impl Into<String>,
    ) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgLinkRepository::new(pool)),
            tokens,
            base_url,
        )
    }
}
