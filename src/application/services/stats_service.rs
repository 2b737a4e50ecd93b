//! Click statistics service.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;
use uuid::Uuid;

/// Service for reading per-link click statistics.
pub struct StatsService<R: LinkRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: LinkRepository + ?Sized> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns every link owned by `user_id`, newest first. No pagination.
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<ShortLink>, AppError> {
        self.repository.list_by_user(user_id).await
    }

    /// Returns the link stored under `code`.
    ///
    /// Any authenticated caller may read any link; ownership is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_code(&self, code: &str, caller: Uuid) -> Result<ShortLink, AppError> {
        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "code": code })))?;

        if !link.is_owned_by(caller) {
            tracing::debug!(code = %code, caller = %caller, "Stats read by non-owner");
        }

        Ok(link)
    }

    /// Counts all stored links. Doubles as a store liveness probe.
    pub async fn total_links(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_list_for_user_passes_owner() {
        let mut mock_repo = MockLinkRepository::new();
        let owner = Uuid::new_v4();
        let links = vec![
            ShortLink::new("aaaa0001".into(), "https://a.example".into(), owner, 3, Utc::now()),
            ShortLink::new("aaaa0002".into(), "https://b.example".into(), owner, 0, Utc::now()),
        ];

        mock_repo
            .expect_list_by_user()
            .withf(move |id| *id == owner)
            .times(1)
            .returning(move |_| Ok(links.clone()));

        let service = StatsService::new(Arc::new(mock_repo));

        let result = service.list_for_user(owner).await.unwrap();
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|l| l.is_owned_by(owner)));
    }

    #[tokio::test]
    async fn test_get_by_code_ignores_ownership() {
        let mut mock_repo = MockLinkRepository::new();
        let link = ShortLink::new(
            "abcd1234".into(),
            "https://example.com".into(),
            Uuid::new_v4(),
            7,
            Utc::now(),
        );
        let expected = link.clone();

        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(link.clone())));

        let service = StatsService::new(Arc::new(mock_repo));

        let result = service.get_by_code("abcd1234", Uuid::new_v4()).await.unwrap();
        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn test_get_by_code_not_found() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let service = StatsService::new(Arc::new(mock_repo));

        let result = service.get_by_code("nope", Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }
}
