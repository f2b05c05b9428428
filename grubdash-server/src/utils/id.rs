//! Record ID generation

use uuid::Uuid;

/// Generate a new record id: 16 random bytes as 32 lowercase hex chars
pub fn next_id() -> String {
    Uuid::new_v4().simple().to_string()
}
