//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod expenses;
pub mod health;
pub mod projects;
pub mod receipts;

/// Creates the API router with all routes, mounted at the root.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(projects::routes())
        .merge(expenses::routes())
        .merge(receipts::routes())
}
