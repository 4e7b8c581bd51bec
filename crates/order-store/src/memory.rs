use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::{
    NewOrder, Order, Result, StoreError,
    store::OrderStore,
};

/// In-memory order store used as the test double for the PostgreSQL
/// implementation.
///
/// Holds a process-lifetime ordered list of orders behind an async
/// RwLock; the lock makes inserts atomic under the multi-threaded
/// runtime. Mirrors the durable variant's contract, including id
/// assignment and the email uniqueness constraint, so API tests can
/// exercise the conflict path. No persistence across restarts.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    orders: Vec<Order>,
    next_id: i64,
}

impl InMemoryOrderStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of persisted orders.
    pub async fn order_count(&self) -> usize {
        self.inner.read().await.orders.len()
    }

    /// Clears all orders.
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.orders.clear();
        inner.next_id = 0;
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert(&self, order: &NewOrder, submitted_at: DateTime<Utc>) -> Result<Order> {
        let mut inner = self.inner.write().await;

        // Uniqueness check under the same lock as the append, matching
        // the single-statement atomicity of the durable variant.
        if inner.orders.iter().any(|o| o.email == order.email) {
            return Err(StoreError::DuplicateEmail(order.email.clone()));
        }

        inner.next_id += 1;
        let record = Order::from_new(inner.next_id, order, submitted_at);
        inner.orders.push(record.clone());

        Ok(record)
    }

    async fn list_newest_first(&self) -> Result<Vec<Order>> {
        let inner = self.inner.read().await;
        let mut orders = inner.orders.clone();
        orders.sort_by(|a, b| {
            b.submitted_at
                .cmp(&a.submitted_at)
                .then(b.id.cmp(&a.id))
        });
        Ok(orders)
    }
}
