//! Order Repository

use super::{RepoError, RepoResult};
use crate::db::MemoryDb;
use crate::utils::id::next_id;
use shared::models::{Order, OrderPayload};

pub fn find_all(db: &MemoryDb) -> Vec<Order> {
    db.orders.all()
}

pub fn find_by_id(db: &MemoryDb, id: &str) -> Option<Order> {
    db.orders.find(id)
}

pub fn create(db: &MemoryDb, data: OrderPayload) -> Order {
    db.orders.insert(Order::from_payload(next_id(), data))
}

pub fn update(db: &MemoryDb, id: &str, data: OrderPayload) -> RepoResult<Order> {
    db.orders
        .update(id, |order| order.apply(data))
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
}

/// Remove an order, returning the removed row
pub fn delete(db: &MemoryDb, id: &str) -> RepoResult<Order> {
    db.orders
        .remove(id)
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
}
