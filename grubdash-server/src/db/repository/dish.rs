//! Dish Repository

use super::{RepoError, RepoResult};
use crate::db::MemoryDb;
use crate::utils::id::next_id;
use shared::models::{Dish, DishPayload};

pub fn find_all(db: &MemoryDb) -> Vec<Dish> {
    db.dishes.all()
}

pub fn find_by_id(db: &MemoryDb, id: &str) -> Option<Dish> {
    db.dishes.find(id)
}

pub fn create(db: &MemoryDb, data: DishPayload) -> Dish {
    db.dishes.insert(Dish::from_payload(next_id(), data))
}

pub fn update(db: &MemoryDb, id: &str, data: DishPayload) -> RepoResult<Dish> {
    db.dishes
        .update(id, |dish| dish.apply(data))
        .ok_or_else(|| RepoError::NotFound(format!("Dish {id} not found")))
}
