//! Request body extraction
//!
//! Every write endpoint takes a `{ "data": { ... } }` envelope. The validators
//! need to see the raw fields (a string price and a missing price get
//! different messages), so the body is kept as a JSON object instead of being
//! deserialized straight into a payload.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use http::StatusCode;
use serde_json::{Map, Value};

use crate::utils::{AppError, ErrorCode};

/// The `data` object of a request body
///
/// A missing body, a body without `data`, or a `data` that is not an object
/// all extract as an empty map and are rejected later by the validators.
/// A body that is not valid JSON is rejected here with 400; a body over the
/// router's size limit keeps its 413.
#[derive(Debug, Clone, Default)]
pub struct RequestData(pub Map<String, Value>);

impl RequestData {
    /// Parse the raw request body
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AppError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let body: Value = serde_json::from_slice(bytes)
            .map_err(|e| AppError::invalid_format(format!("Malformed JSON body: {e}")))?;

        let data = match body {
            Value::Object(mut body) => match body.remove("data") {
                Some(Value::Object(data)) => data,
                _ => Map::new(),
            },
            _ => Map::new(),
        };
        Ok(Self(data))
    }
}

impl<S> FromRequest<S> for RequestData
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| match e.status() {
                StatusCode::PAYLOAD_TOO_LARGE => {
                    AppError::with_message(ErrorCode::PayloadTooLarge, e.body_text())
                }
                _ => AppError::invalid_format(e.body_text()),
            })?;
        Self::from_slice(&bytes)
    }
}
