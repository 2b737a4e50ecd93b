//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Why an insert was rejected.
///
/// Unique violations are split by the constraint that fired so the caller can
/// tell a code collision (retry with a new code) from a concurrent insert of
/// the same URL (return the existing link).
#[derive(Debug, thiserror::Error)]
pub enum CreateLinkError {
    #[error("short code already exists")]
    CodeTaken,

    #[error("url already shortened")]
    OriginalTaken,

    #[error(transparent)]
    Other(#[from] AppError),
}

/// Repository interface for managing short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link with zero clicks.
    ///
    /// # Errors
    ///
    /// Returns [`CreateLinkError::CodeTaken`] if the code already exists.
    /// Returns [`CreateLinkError::OriginalTaken`] if the URL was stored concurrently.
    /// Returns [`CreateLinkError::Other`] on database errors.
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, CreateLinkError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Finds a link by its destination URL, regardless of owner.
    async fn find_by_original(&self, original: &str) -> Result<Option<ShortLink>, AppError>;

    /// Lists every link owned by `user_id`, newest first.
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<ShortLink>, AppError>;

    /// Atomically increments the click counter of `code`.
    ///
    /// Returns the destination URL, or `None` if the code does not exist.
    /// Concurrent calls never lose increments.
    async fn record_click(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Counts stored links.
    async fn count(&self) -> Result<i64, AppError>;
}
