//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /shorten`.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(
        url(message = "Url not valid"),
        length(max = 2048, message = "Url too long")
    )]
    pub url: String,
}

/// `message` is present only when the URL had already been shortened.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
