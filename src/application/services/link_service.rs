//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::{CreateLinkError, LinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

/// Maximum number of fresh codes tried before giving up on a collision streak.
const MAX_CODE_ATTEMPTS: usize = 5;

/// Result of a shorten request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenOutcome {
    /// A new link owned by the caller was stored.
    Created(ShortLink),
    /// The URL was already shortened (by anyone); nothing was stored.
    Existing(ShortLink),
}

impl ShortenOutcome {
    pub fn link(&self) -> &ShortLink {
        match self {
            ShortenOutcome::Created(link) | ShortenOutcome::Existing(link) => link,
        }
    }
}

/// Service for creating and resolving shortened links.
///
/// Deduplicates by destination URL across all users: a URL that is already
/// stored is returned as-is, even when another user owns it.
pub struct LinkService<R: LinkRepository + ?Sized> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: LinkRepository + ?Sized> LinkService<R> {
    /// Creates a new link service.
    ///
    /// `base_url` prefixes every short URL, e.g. `http://localhost:3333`.
    pub fn new(repository: Arc<R>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_url: base_url.into(),
        }
    }

    /// Shortens `original` on behalf of `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures or when
    /// [`MAX_CODE_ATTEMPTS`] consecutive codes collide.
    pub async fn shorten(&self, original: &str, owner: Uuid) -> Result<ShortenOutcome, AppError> {
        if let Some(existing) = self.repository.find_by_original(original).await? {
            warn!(event = "duplicate_link", url = %original, code = %existing.code);
            return Ok(ShortenOutcome::Existing(existing));
        }

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let new_link = NewShortLink {
                code: generate_code()?,
                original: original.to_string(),
                user_id: owner,
            };

            match self.repository.create(new_link).await {
                Ok(link) => {
                    info!(event = "link_created", url = %original, code = %link.code);
                    return Ok(ShortenOutcome::Created(link));
                }
                Err(CreateLinkError::CodeTaken) => {
                    warn!(event = "code_collision", attempt, "Generated code already taken");
                }
                Err(CreateLinkError::OriginalTaken) => {
                    // Lost a race with a concurrent request for the same URL.
                    let existing = self
                        .repository
                        .find_by_original(original)
                        .await?
                        .ok_or_else(|| {
                            AppError::internal(
                                "Link vanished after conflict",
                                json!({ "url": original }),
                            )
                        })?;
                    warn!(event = "duplicate_link", url = %original, code = %existing.code);
                    return Ok(ShortenOutcome::Existing(existing));
                }
                Err(CreateLinkError::Other(e)) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Records a click on `code` and returns its destination URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        self.repository
            .record_click(code)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "code": code })))
    }

    /// Constructs the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/r/{}", self.base_url.trim_end_matches('/'), code)
    }
}
