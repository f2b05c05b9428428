//! Embedded seed data
//!
//! The server ships with a small menu and a few orders so a fresh instance
//! has something to list.

use shared::models::{Dish, Order};

use super::MemoryDb;
use crate::utils::{AppError, AppResult, ErrorCode};

const DISHES_JSON: &str = include_str!("../../data/dishes-data.json");
const ORDERS_JSON: &str = include_str!("../../data/orders-data.json");

/// Parse the embedded dishes
pub fn dishes() -> AppResult<Vec<Dish>> {
    serde_json::from_str(DISHES_JSON).map_err(|e| {
        AppError::with_message(ErrorCode::SeedDataInvalid, format!("dishes-data.json: {e}"))
    })
}

/// Parse the embedded orders
pub fn orders() -> AppResult<Vec<Order>> {
    serde_json::from_str(ORDERS_JSON).map_err(|e| {
        AppError::with_message(ErrorCode::SeedDataInvalid, format!("orders-data.json: {e}"))
    })
}

impl MemoryDb {
    /// Collections filled with the embedded seed data
    pub fn seeded() -> AppResult<Self> {
        let db = Self::with_rows(dishes()?, orders()?);
        tracing::info!(
            dishes = db.dishes.len(),
            orders = db.orders.len(),
            "Seed data loaded"
        );
        Ok(db)
    }
}
