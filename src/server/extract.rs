//! Axum extractors for write payloads and path identifiers
//!
//! Both reject with an [`ApiError`] so a malformed request gets the same
//! response shape as every other failure.

use super::error::{ApiError, RequestError};
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// Axum extractor for an optional JSON payload
///
/// An empty body or a literal `null` yields `JsonPayload(None)`, leaving it to
/// the write pipeline to reject the absent payload with a violation. Anything
/// else must be valid JSON for `T`.
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_region(
///     JsonPayload(payload): JsonPayload<RegionPayload>,
/// ) -> Result<impl IntoResponse, ApiError> {
///     let region = WritePipeline::new(store).create(payload).await?;
///     // ...
/// }
/// ```
#[derive(Debug)]
pub struct JsonPayload<T>(pub Option<T>);

impl<S, T> FromRequest<S> for JsonPayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            ApiError::from(RequestError::InvalidJson {
                message: e.body_text(),
            })
        })?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonPayload(None));
        }

        serde_json::from_slice::<Option<T>>(&body)
            .map(JsonPayload)
            .map_err(|e| {
                ApiError::from(RequestError::InvalidJson {
                    message: e.to_string(),
                })
            })
    }
}

/// Axum extractor for the `{id}` path segment, parsed as a UUID
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub Uuid);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                ApiError::from(RequestError::InvalidPath {
                    message: e.body_text(),
                })
            })?;

        parse_id(&raw).map(EntityId)
    }
}

/// Parse a path identifier, rejecting anything that is not a UUID
pub fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| {
        ApiError::from(RequestError::InvalidUuid {
            id: raw.to_string(),
        })
    })
}
