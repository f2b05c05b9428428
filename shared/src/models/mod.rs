//! Data models
//!
//! Shared between grubdash-server and its clients (via API).
//! IDs are 32-character hex strings generated by the server.

pub mod dish;
pub mod order;

// Re-exports
pub use dish::*;
pub use order::*;
