//! In-memory entity store.
//!
//! Four insertion-ordered collections plus the pricing configuration. The
//! store does no I/O; mirroring to durable storage lives in
//! [`crate::persistence`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Customer, MarketplaceFees, Order, Product, Supplier};

/// A record addressable by an opaque string id.
pub trait Record {
    fn id(&self) -> &str;
}

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Supplier {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Record> Collection<T> {
    /// Appends a record built from a freshly generated id and creation time.
    pub fn insert<F>(&mut self, build: F) -> &T
    where
        F: FnOnce(String, DateTime<Utc>) -> T,
    {
        let id = self.next_id();
        self.items.push(build(id, Utc::now()));
        let last = self.items.len() - 1;
        &self.items[last]
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Applies `apply` to the record with `id` in place. Returns `None` when
    /// no such record exists.
    pub fn update<F>(&mut self, id: &str, apply: F) -> Option<&T>
    where
        F: FnOnce(&mut T),
    {
        let item = self.items.iter_mut().find(|item| item.id() == id)?;
        apply(item);
        Some(item)
    }

    /// Removes the record with `id`; absent ids are a no-op.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn next_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Store {
    pub products: Collection<Product>,
    pub suppliers: Collection<Supplier>,
    pub customers: Collection<Customer>,
    pub orders: Collection<Order>,
    pub fees: MarketplaceFees,
    pub default_shipping_cost: Decimal,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
}
