//! HTTP API layer with Axum routes and extractors.
//!
//! This crate provides:
//! - REST API routes for projects, expenses and receipts
//! - Request extractors with the service's error conventions
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;

pub use error::ApiError;

use axum::Router;
use sea_orm::DatabaseConnection;
use sitebook_core::storage::StorageService;
use sitebook_shared::IdGenerator;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Object storage for receipts.
    pub storage: Arc<StorageService>,
    /// Identifier generator for new projects and expenses.
    pub ids: Arc<IdGenerator>,
}

impl AppState {
    /// Bundles the process-wide handles.
    #[must_use]
    pub fn new(db: DatabaseConnection, storage: StorageService, ids: IdGenerator) -> Self {
        Self {
            db: Arc::new(db),
            storage: Arc::new(storage),
            ids: Arc::new(ids),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
