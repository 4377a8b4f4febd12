//! HTTP API server with observability for the users and circles service.
//!
//! Provides REST endpoints for the user and circle use cases, with
//! structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use domain::{CircleRepository, UserRepository};
use metrics_exporter_prometheus::PrometheusHandle;
use persistence::{InMemoryCircleRepository, InMemoryStore, InMemoryUserRepository};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<U, C>(state: Arc<AppState<U, C>>, metrics_handle: PrometheusHandle) -> Router
where
    U: UserRepository + Clone + 'static,
    C: CircleRepository + Clone + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route(
            "/users",
            post(routes::users::register::<U, C>).get(routes::users::find::<U, C>),
        )
        .route(
            "/users/{id}",
            get(routes::users::get::<U, C>)
                .put(routes::users::update::<U, C>)
                .delete(routes::users::delete::<U, C>),
        )
        .route("/circles", post(routes::circles::register::<U, C>))
        .route(
            "/circles/{id}",
            get(routes::circles::get::<U, C>)
                .put(routes::circles::update::<U, C>)
                .delete(routes::circles::delete::<U, C>),
        )
        .route("/circles/{id}/members", post(routes::circles::join::<U, C>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state backed by a fresh in-memory store.
///
/// The store is returned too so callers can inspect or clear it.
pub fn create_in_memory_state() -> (
    Arc<AppState<InMemoryUserRepository, InMemoryCircleRepository>>,
    InMemoryStore,
) {
    let store = InMemoryStore::new();
    let state = AppState::new(
        InMemoryUserRepository::new(store.clone()),
        InMemoryCircleRepository::new(store.clone()),
    );
    (Arc::new(state), store)
}
