//! Shared types for GrubDash
//!
//! Domain models, the unified error type and the `{ "data": ... }` envelope
//! used by grubdash-server and its clients.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use response::DataEnvelope;
