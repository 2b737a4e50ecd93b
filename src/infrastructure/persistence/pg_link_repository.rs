//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use super::unique_violation;
use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::{CreateLinkError, LinkRepository};
use crate::error::AppError;

const CODE_CONSTRAINT: &str = "short_links_pkey";
const ORIGINAL_CONSTRAINT: &str = "short_links_original_md5_key";

/// PostgreSQL repository for link storage and retrieval.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, CreateLinkError> {
        sqlx::query_as::<_, ShortLink>(
            r#"
            INSERT INTO short_links (code, original, user_id)
            VALUES ($1, $2, $3)
            RETURNING code, original, user_id, clicks, created_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.original)
        .bind(new_link.user_id)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| match unique_violation(&e).as_deref() {
            Some(CODE_CONSTRAINT) => CreateLinkError::CodeTaken,
            Some(ORIGINAL_CONSTRAINT) => CreateLinkError::OriginalTaken,
            _ => CreateLinkError::Other(AppError::from(e)),
        })
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let link = sqlx::query_as::<_, ShortLink>(
            r#"
            SELECT code, original, user_id, clicks, created_at
            FROM short_links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_original(&self, original: &str) -> Result<Option<ShortLink>, AppError> {
        // md5() predicate lets the planner use the unique index
        let link = sqlx::query_as::<_, ShortLink>(
            r#"
            SELECT code, original, user_id, clicks, created_at
            FROM short_links
            WHERE md5(original) = md5($1) AND original = $1
            "#,
        )
        .bind(original)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<ShortLink>, AppError> {
        let links = sqlx::query_as::<_, ShortLink>(
            r#"
            SELECT code, original, user_id, clicks, created_at
            FROM short_links
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn record_click(&self, code: &str) -> Result<Option<String>, AppError> {
        let original = sqlx::query_scalar::<_, String>(
            r#"
            UPDATE short_links
            SET clicks = clicks + 1
            WHERE code = $1
            RETURNING original
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(original)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM short_links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
