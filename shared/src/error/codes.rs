//! Unified error codes for GrubDash
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Dish errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so clients can match on
/// them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid format (e.g. malformed JSON body)
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// HTTP method not supported on this route
    MethodNotAllowed = 9,
    /// Request body exceeds the size limit
    PayloadTooLarge = 10,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Body id does not match the route id
    OrderIdMismatch = 4002,
    /// Order has no dishes
    OrderEmpty = 4003,
    /// A dish line has an invalid quantity
    OrderInvalidQuantity = 4004,
    /// Status is missing or not allowed
    OrderInvalidStatus = 4005,
    /// Only pending orders may be deleted
    OrderNotPending = 4006,
    /// Delivered orders are frozen
    OrderAlreadyDelivered = 4007,

    // ==================== 6xxx: Dish ====================
    /// Dish not found
    DishNotFound = 6001,
    /// Dish price is not a positive number
    DishInvalidPrice = 6002,
    /// Body id does not match the route id
    DishIdMismatch = 6003,

    // ==================== 9xxx: System ====================
    /// Embedded seed data failed to parse
    SeedDataInvalid = 9006,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message used when no custom message is supplied
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::MethodNotAllowed => "Method not allowed",
            ErrorCode::PayloadTooLarge => "Request body is too large",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderIdMismatch => "Order id does not match route id",
            ErrorCode::OrderEmpty => "Order must include at least one dish",
            ErrorCode::OrderInvalidQuantity => "Dish quantity must be an integer greater than 0",
            ErrorCode::OrderInvalidStatus => "Order must have a valid status",
            ErrorCode::OrderNotPending => "Order must have status 'pending' to delete",
            ErrorCode::OrderAlreadyDelivered => "A delivered order cannot be changed",

            // Dish
            ErrorCode::DishNotFound => "Dish not found",
            ErrorCode::DishInvalidPrice => "Dish price must be a number greater than 0",
            ErrorCode::DishIdMismatch => "Dish id does not match route id",

            // System
            ErrorCode::SeedDataInvalid => "Embedded seed data is invalid",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            9 => Ok(ErrorCode::MethodNotAllowed),
            10 => Ok(ErrorCode::PayloadTooLarge),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderIdMismatch),
            4003 => Ok(ErrorCode::OrderEmpty),
            4004 => Ok(ErrorCode::OrderInvalidQuantity),
            4005 => Ok(ErrorCode::OrderInvalidStatus),
            4006 => Ok(ErrorCode::OrderNotPending),
            4007 => Ok(ErrorCode::OrderAlreadyDelivered),

            // Dish
            6001 => Ok(ErrorCode::DishNotFound),
            6002 => Ok(ErrorCode::DishInvalidPrice),
            6003 => Ok(ErrorCode::DishIdMismatch),

            // System
            9006 => Ok(ErrorCode::SeedDataInvalid),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
