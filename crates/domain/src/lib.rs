//! Domain layer for the pizza ordering service.
//!
//! Validates raw form submissions into orders and drives them through
//! the persistence contract defined by the `order-store` crate.

pub mod error;
pub mod form;
pub mod service;

pub use error::ServiceError;
pub use form::{FieldError, OrderForm, ValidationErrors};
pub use order_store::{Fulfillment, NewOrder, Order, OrderStore, Size};
pub use service::OrderService;
