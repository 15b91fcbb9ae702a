//! HTTP API server for the product catalog sync service.
//!
//! Provides REST endpoints for listing, creating and updating products,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::{get, put};
use catalog_store::CatalogStore;
use metrics_exporter_prometheus::PrometheusHandle;
use sync::SyncCoordinator;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use webflow::ExternalCatalog;

use routes::products::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S, E>(state: Arc<AppState<S, E>>, metrics_handle: PrometheusHandle) -> Router
where
    S: CatalogStore + 'static,
    E: ExternalCatalog + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route(
            "/products",
            get(routes::products::list::<S, E>).post(routes::products::create::<S, E>),
        )
        .route("/products/{id}", put(routes::products::update::<S, E>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state around a store and an external catalog.
pub fn create_state<S, E>(store: S, external: E) -> Arc<AppState<S, E>>
where
    S: CatalogStore,
    E: ExternalCatalog,
{
    Arc::new(AppState {
        coordinator: SyncCoordinator::new(store, external),
    })
}
