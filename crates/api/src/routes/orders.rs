//! Order submission and admin listing endpoints.

use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::response::Html;
use domain::{OrderForm, OrderService, OrderStore};

use crate::error::ApiError;
use crate::views;

/// Shared application state accessible from all handlers.
pub struct AppState<S: OrderStore> {
    pub orders: OrderService<S>,
}

/// POST /submit-order — validate, persist, and render the confirmation.
///
/// The body is form-encoded; `toppings` may repeat, so the raw pairs
/// are collected before the Order Service normalizes them.
#[tracing::instrument(skip(state, fields))]
pub async fn submit<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Html<String>, ApiError> {
    let form = OrderForm::from_pairs(fields);
    let order = state.orders.submit(form).await?;

    Ok(Html(views::confirmation(&order)))
}

/// GET /admin — render all orders, newest submission first.
#[tracing::instrument(skip(state))]
pub async fn admin<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Html<String>, ApiError> {
    let orders = state.orders.list_orders().await?;

    Ok(Html(views::admin(&orders)))
}
