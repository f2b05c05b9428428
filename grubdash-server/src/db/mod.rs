//! Database Module
//!
//! Process-local storage: one lock-protected `Vec` per collection, shared by
//! every request through [`MemoryDb`]. Nothing is persisted; a restart goes
//! back to the seed data (or to empty collections).

pub mod repository;
pub mod seed;

use std::sync::Arc;

use parking_lot::RwLock;
use shared::models::{Dish, Order};

/// A row that can be addressed by id
pub trait Record: Clone {
    fn id(&self) -> &str;
}

impl Record for Dish {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

/// An ordered in-memory collection
///
/// Rows keep insertion order, so listing returns them the way they were
/// created. Each method holds the lock only for its own read or mutation.
#[derive(Debug)]
pub struct Table<T> {
    rows: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::from_rows(Vec::new())
    }
}

impl<T> Table<T> {
    pub fn from_rows(rows: Vec<T>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

impl<T: Record> Table<T> {
    /// Snapshot of every row
    pub fn all(&self) -> Vec<T> {
        self.rows.read().clone()
    }

    pub fn find(&self, id: &str) -> Option<T> {
        self.rows.read().iter().find(|row| row.id() == id).cloned()
    }

    /// Append a row and return it
    pub fn insert(&self, row: T) -> T {
        self.rows.write().push(row.clone());
        row
    }

    /// Mutate the row with `id` in place, returning the updated row
    pub fn update(&self, id: &str, apply: impl FnOnce(&mut T)) -> Option<T> {
        let mut rows = self.rows.write();
        let row = rows.iter_mut().find(|row| row.id() == id)?;
        apply(row);
        Some(row.clone())
    }

    /// Remove the row with `id`, returning it
    pub fn remove(&self, id: &str) -> Option<T> {
        let mut rows = self.rows.write();
        let index = rows.iter().position(|row| row.id() == id)?;
        Some(rows.remove(index))
    }
}

/// In-memory database service — owns the dish and order collections
#[derive(Debug, Clone, Default)]
pub struct MemoryDb {
    pub dishes: Table<Dish>,
    pub orders: Table<Order>,
}

impl MemoryDb {
    /// Empty collections
    pub fn new() -> Self {
        Self::default()
    }

    /// Collections pre-filled with the given rows
    pub fn with_rows(dishes: Vec<Dish>, orders: Vec<Order>) -> Self {
        Self {
            dishes: Table::from_rows(dishes),
            orders: Table::from_rows(orders),
        }
    }
}
