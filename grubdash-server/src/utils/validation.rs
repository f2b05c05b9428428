//! Input validation helpers
//!
//! A request is validated by an ordered chain of checks. Each check looks at
//! one field (or one cross-field relationship) and either passes or returns
//! the error that becomes the response. The first failing check wins.
//!
//! The checks read the raw `data` object rather than a typed payload, so a
//! missing field, a wrong JSON type and an empty value can each get their own
//! message.

use serde_json::{Map, Value};

use crate::utils::{AppError, AppResult};

/// A single validator over a request context `C`
///
/// Validators are plain functions, borrowed into a chain as trait objects.
pub type Check<'a, C> = &'a dyn Fn(&C) -> AppResult<()>;

/// Run `chain` in order, stopping at the first failure
pub fn run_chain<C>(ctx: &C, chain: &[Check<'_, C>]) -> AppResult<()> {
    chain.iter().try_for_each(|check| check(ctx))
}

/// `A 'name' property is required.` / `An 'image_url' property is required.`
pub fn required_message(field: &str) -> String {
    let article = match field.chars().next() {
        Some(c) if "aeiouAEIOU".contains(c) => "An",
        _ => "A",
    };
    format!("{article} '{field}' property is required.")
}

/// Validate that a required field is a non-empty JSON string.
///
/// Whitespace counts as content: `"   "` passes.
pub fn require_text<'a>(data: &'a Map<String, Value>, field: &str) -> AppResult<&'a str> {
    match data.get(field).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::required_field(field, required_message(field))),
    }
}

/// Body `id` that conflicts with the route id, if any.
///
/// A missing, `null` or empty id never conflicts.
pub fn conflicting_id(data: &Map<String, Value>, route_id: &str) -> Option<String> {
    match data.get("id") {
        None | Some(Value::Null) => None,
        Some(Value::String(id)) if id.is_empty() || id == route_id => None,
        Some(Value::String(id)) => Some(id.clone()),
        Some(other) => Some(other.to_string()),
    }
}

/// Convert the validated `data` object into a typed payload
pub fn into_payload<T: serde::de::DeserializeOwned>(data: &Map<String, Value>) -> AppResult<T> {
    serde_json::from_value(Value::Object(data.clone()))
        .map_err(|e| AppError::validation(format!("Invalid payload: {e}")))
}
