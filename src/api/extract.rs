//! Request extractors that validate input before handlers run.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been deserialized and passed `validator` checks.
///
/// Malformed or mistyped bodies and failed field rules are both rejected as
/// [`AppError::Validation`] (400), so no store access happens for bad input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::bad_request("Validation error", json!({ "body": rejection.body_text() }))
            })?;

        value.validate()?;

        Ok(Self(value))
    }
}
