//! JSON body extractor with API-shaped rejections.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;

/// Like [`axum::Json`], but a missing, mistyped or malformed body becomes a
/// 400 [`AppError::Validation`] with the standard error body.
///
/// # Example
///
/// ```rust,ignore
/// async fn create(ApiJson(payload): ApiJson<CreateVendorRequest>) { /* ... */ }
/// ```
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            AppError::bad_request("Invalid request body", json!({"reason": e.body_text()}))
        })?;

        Ok(ApiJson(value))
    }
}
