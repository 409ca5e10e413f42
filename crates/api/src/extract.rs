//! Request body extractor for JSON payloads.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::{Map, Value};

use crate::error::AppError;

/// A request body parsed as arbitrary JSON.
///
/// Unlike `axum::Json`, this does not insist on a `Content-Type` header,
/// treats an empty body as `{}`, and rejects malformed JSON with an
/// [`AppError::InvalidJson`] body. Typed decoding is left to the schema
/// validator so that every field problem is reported together.
#[derive(Debug)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::InvalidJson(rejection.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(Value::Object(Map::new())));
        }

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| AppError::InvalidJson(e.to_string()))
    }
}
