//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::ShortLink;

/// Full link record as listed by `GET /stats`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkItem {
    pub code: String,
    pub original: String,
    pub user_id: Uuid,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ShortLink> for LinkItem {
    fn from(link: ShortLink) -> Self {
        Self {
            code: link.code,
            original: link.original,
            user_id: link.user_id,
            clicks: link.clicks,
            created_at: link.created_at,
        }
    }
}

/// Response of `GET /stats`.
#[derive(Debug, Serialize)]
pub struct StatsListResponse {
    pub links: Vec<LinkItem>,
}

/// Response of `GET /stats/{code}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub original: String,
    pub code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ShortLink> for StatsResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            original: link.original,
            code: link.code,
            clicks: link.clicks,
            created_at: link.created_at,
        }
    }
}
