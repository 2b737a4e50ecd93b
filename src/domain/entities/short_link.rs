//! Short link entity representing a code → URL mapping.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A shortened URL owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ShortLink {
    pub code: String,
    pub original: String,
    pub user_id: Uuid,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        code: String,
        original: String,
        user_id: Uuid,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            original,
            user_id,
            clicks,
            created_at,
        }
    }

    /// Returns true if the link belongs to `user_id`.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

/// Input data for creating a new link. Clicks always start at zero.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub code: String,
    pub original: String,
    pub user_id: Uuid,
}
