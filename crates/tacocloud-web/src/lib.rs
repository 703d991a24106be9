//! Taco Cloud - design and order tacos in the browser.
//!
//! This crate serves the design form over HTTP:
//! - `GET /design` renders the ingredient catalog with the session's order
//! - `POST /design` adds a taco to the session's order
//! - `GET /api/ingredients` exposes the catalog as JSON

pub mod config;
pub mod error;
pub mod routes;
pub mod session;
pub mod state;
pub mod views;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the Axum router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .merge(routes::health::routes())
        // Design form
        .merge(routes::design::routes())
        // JSON catalog
        .merge(routes::api::routes())
        // Middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
