//! Order Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Delivery status lifecycle
///
/// Serialized in kebab-case: `pending`, `preparing`, `out-for-delivery`,
/// `delivered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::OutForDelivery => "out-for-delivery",
            Self::Delivered => "delivered",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Statuses a client may set through an update.
    /// `delivered` is not one of them.
    pub fn is_updatable_to(&self) -> bool {
        !matches!(self, Self::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown status string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownOrderStatus(s.to_string()))
    }
}

/// One line of an order
///
/// Only `quantity` is interpreted. Every other field the client sent
/// (`dishId`, or a full dish snapshot) is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDish {
    /// Always >= 1
    pub quantity: u32,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderDish>,
    #[serde(default)]
    pub status: OrderStatus,
}

/// Create / update order payload
///
/// `status` is optional on create (defaults to pending) and required on update;
/// the validators enforce that before this is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderDish>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
}

impl Order {
    /// Build a new order with a freshly generated id
    pub fn from_payload(id: impl Into<String>, payload: OrderPayload) -> Self {
        Self {
            id: id.into(),
            deliver_to: payload.deliver_to,
            mobile_number: payload.mobile_number,
            dishes: payload.dishes,
            status: payload.status.unwrap_or_default(),
        }
    }

    /// Replace deliverTo, mobileNumber, dishes and status, keeping the id
    pub fn apply(&mut self, payload: OrderPayload) {
        self.deliver_to = payload.deliver_to;
        self.mobile_number = payload.mobile_number;
        self.dishes = payload.dishes;
        if let Some(status) = payload.status {
            self.status = status;
        }
    }
}
