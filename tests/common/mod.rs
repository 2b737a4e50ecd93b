#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::extract::ConnectInfo;
use axum::http::HeaderValue;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::json;
use shortlink_service::config::Config;
use shortlink_service::domain::entities::{NewShortLink, NewUser, ShortLink, User};
use shortlink_service::domain::repositories::{CreateLinkError, LinkRepository, UserRepository};
use shortlink_service::error::AppError;
use shortlink_service::infrastructure::security::TokenService;
use shortlink_service::routes::app_router;
use shortlink_service::state::AppState;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tower::Layer;
use uuid::Uuid;

pub const TEST_SECRET: &str = "test-signing-secret";
pub const BASE_URL: &str = "http://localhost:3333";

/// In-memory user store enforcing email uniqueness.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::conflict("User already exists", json!({})));
        }

        let user = User {
            id: Uuid::new_v4(),
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.len() as i64)
    }
}

/// In-memory link store with unique codes, unique originals and
/// increments performed under one lock.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<ShortLink>>,
}

impl InMemoryLinkRepository {
    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }

    pub fn get(&self, code: &str) -> Option<ShortLink> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.code == code)
            .cloned()
    }

    /// Inserts a link directly, bypassing code generation.
    pub fn seed(&self, code: &str, original: &str, owner: Uuid, clicks: i64) -> ShortLink {
        let link = ShortLink::new(
            code.to_string(),
            original.to_string(),
            owner,
            clicks,
            Utc::now(),
        );
        self.links.lock().unwrap().push(link.clone());
        link
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, CreateLinkError> {
        let mut links = self.links.lock().unwrap();
        if links.iter().any(|l| l.code == new_link.code) {
            return Err(CreateLinkError::CodeTaken);
        }
        if links.iter().any(|l| l.original == new_link.original) {
            return Err(CreateLinkError::OriginalTaken);
        }

        let link = ShortLink::new(
            new_link.code,
            new_link.original,
            new_link.user_id,
            0,
            Utc::now(),
        );
        links.push(link.clone());
        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.get(code))
    }

    async fn find_by_original(&self, original: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.original == original)
            .cloned())
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<ShortLink>, AppError> {
        // Insertion order reversed: newest first.
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn record_click(&self, code: &str) -> Result<Option<String>, AppError> {
        let mut links = self.links.lock().unwrap();
        Ok(links.iter_mut().find(|l| l.code == code).map(|l| {
            l.clicks += 1;
            l.original.clone()
        }))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.len() as i64)
    }
}

/// Link store whose every call fails, for degraded-path tests.
pub struct UnavailableLinkRepository;

fn unavailable() -> AppError {
    AppError::internal("Database error", json!({ "reason": "connection refused" }))
}

#[async_trait]
impl LinkRepository for UnavailableLinkRepository {
    async fn create(&self, _new_link: NewShortLink) -> Result<ShortLink, CreateLinkError> {
        Err(CreateLinkError::Other(unavailable()))
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<ShortLink>, AppError> {
        Err(unavailable())
    }

    async fn find_by_original(&self, _original: &str) -> Result<Option<ShortLink>, AppError> {
        Err(unavailable())
    }

    async fn list_by_user(&self, _user_id: Uuid) -> Result<Vec<ShortLink>, AppError> {
        Err(unavailable())
    }

    async fn record_click(&self, _code: &str) -> Result<Option<String>, AppError> {
        Err(unavailable())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(unavailable())
    }
}

/// State plus handles on the stores behind it.
pub struct TestContext {
    pub state: AppState,
    pub users: Arc<InMemoryUserRepository>,
    pub links: Arc<InMemoryLinkRepository>,
    pub tokens: Arc<TokenService>,
}

impl TestContext {
    /// Signs a token for an arbitrary identity.
    pub fn token_for(&self, id: Uuid, email: &str) -> String {
        self.tokens.issue(id, email).unwrap()
    }
}

pub fn create_test_state() -> TestContext {
    let users = Arc::new(InMemoryUserRepository::default());
    let links = Arc::new(InMemoryLinkRepository::default());
    let tokens = Arc::new(TokenService::new(TEST_SECRET));

    let state = AppState::new(users.clone(), links.clone(), tokens.clone(), BASE_URL);

    TestContext {
        state,
        users,
        links,
        tokens,
    }
}

pub fn test_config(rate_limit_per_minute: u32) -> Config {
    Config {
        database_url: "postgres://localhost/unused".to_string(),
        host: "127.0.0.1".to_string(),
        port: 3333,
        base_url: BASE_URL.to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        cors_origins: vec!["http://localhost:3000".to_string()],
        rate_limit_per_minute,
        behind_proxy: false,
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        db_max_connections: 1,
        db_connect_timeout: 1,
        db_idle_timeout: 1,
        db_max_lifetime: 1,
    }
}

/// Full application router, as served in production, behind a fake peer address.
pub fn full_server(state: AppState, rate_limit_per_minute: u32) -> TestServer {
    let app = app_router(state, &test_config(rate_limit_per_minute))
        .unwrap()
        .layer(MockConnectInfoLayer);

    TestServer::new(app).unwrap()
}

pub fn server_for(app: Router) -> TestServer {
    TestServer::new(app).unwrap()
}

pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {token}")).unwrap()
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
