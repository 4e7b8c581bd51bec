//! HTTP server for the pizza ordering service.
//!
//! Maps the fixed route table to page renders and the order submission
//! flow, with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod views;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use domain::{OrderService, OrderStore};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
///
/// Unmatched paths fall through to static-asset serving from
/// `public_dir`, which responds 404 for misses.
pub fn create_app<S: OrderStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
    public_dir: &str,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::pages::home))
        .route("/contact-us", get(routes::pages::contact))
        .route("/order", get(routes::pages::order_form))
        .route("/admin", get(routes::orders::admin::<S>))
        .route("/submit-order", post(routes::orders::submit::<S>))
        .route("/health", get(routes::health::check))
        .with_state(state)
        .merge(metrics_router)
        .fallback_service(ServeDir::new(public_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the shared application state around a store.
pub fn create_state<S: OrderStore + 'static>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState {
        orders: OrderService::new(store),
    })
}
