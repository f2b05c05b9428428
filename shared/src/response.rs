//! API envelope types
//!
//! Request and success response bodies share one shape:
//! ```json
//! { "data": { ... } }
//! ```
//! Error bodies are described by [`crate::error::ErrorResponse`].

use serde::{Deserialize, Serialize};

/// `{ "data": ... }` wrapper used by both request and response bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> axum::response::IntoResponse for DataEnvelope<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self).into_response()
    }
}
