//! Order service: validation, normalization, and persistence of
//! submitted orders.

use chrono::Utc;
use order_store::{Order, OrderStore};

use crate::error::ServiceError;
use crate::form::OrderForm;

/// Service for accepting and listing orders.
///
/// Owns the submission flow: validate the raw fields, assign the
/// submission timestamp, and delegate the append to the injected store.
pub struct OrderService<S> {
    store: S,
}

impl<S: OrderStore> OrderService<S> {
    /// Creates a new order service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Accepts a raw submission and persists it.
    ///
    /// Returns the persisted record, including the store-assigned id
    /// and the submission timestamp, for confirmation rendering.
    #[tracing::instrument(skip(self, form))]
    pub async fn submit(&self, form: OrderForm) -> Result<Order, ServiceError> {
        let new_order = form.validate()?;

        let order = self.store.insert(&new_order, Utc::now()).await?;

        metrics::counter!("orders_submitted_total").increment(1);
        tracing::info!(
            order_id = order.id,
            method = %order.method,
            size = %order.size,
            "order persisted"
        );

        Ok(order)
    }

    /// Returns all persisted orders, newest submission first.
    #[tracing::instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, ServiceError> {
        Ok(self.store.list_newest_first().await?)
    }
}
