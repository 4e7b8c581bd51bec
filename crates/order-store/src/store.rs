use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{NewOrder, Order, Result};

/// Core trait for order store implementations.
///
/// A store owns the identifier assignment, the email uniqueness
/// constraint, and the listing order; callers never re-check any of
/// these. All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists a validated order, assigning its identifier.
    ///
    /// The insert is atomic with respect to concurrent inserts. Fails
    /// with [`StoreError::DuplicateEmail`] when an order with the same
    /// email already exists.
    ///
    /// [`StoreError::DuplicateEmail`]: crate::StoreError::DuplicateEmail
    async fn insert(&self, order: &NewOrder, submitted_at: DateTime<Utc>) -> Result<Order>;

    /// Returns all persisted orders, newest submission first.
    ///
    /// Ordering is by submitted_at descending with id descending as the
    /// tiebreak, enforced by the storage layer itself.
    async fn list_newest_first(&self) -> Result<Vec<Order>>;
}
