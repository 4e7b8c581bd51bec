//! Order persistence for the pizza ordering service.
//!
//! Exposes one [`OrderStore`] contract with two implementations: the
//! PostgreSQL store used in production and an in-memory store used as
//! a test double.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod record;
pub mod store;

pub use error::{Result, StoreError};
pub use memory::InMemoryOrderStore;
pub use postgres::PostgresOrderStore;
pub use record::{Fulfillment, NewOrder, Order, Size};
pub use store::OrderStore;
