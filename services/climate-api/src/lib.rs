//! Climate Query Service Library
//!
//! This crate provides the HTTP server implementation for the read-only
//! climate observation API backed by the Hawaii SQLite dataset.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod handlers;
pub mod state;

use state::AppState;

/// Build the application router with all API routes and middleware.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Landing page
        .route("/", get(handlers::landing::landing_handler))
        // Fixed query routes
        .route(
            "/api/v1.0/precipitation",
            get(handlers::precipitation::precipitation_handler),
        )
        .route(
            "/api/v1.0/stations",
            get(handlers::stations::stations_handler),
        )
        .route("/api/v1.0/tobs", get(handlers::tobs::tobs_handler))
        // Temperature aggregates over a date range
        .route(
            "/api/v1.0/:start",
            get(handlers::temperature::start_handler),
        )
        .route(
            "/api/v1.0/:start/:end",
            get(handlers::temperature::start_end_handler),
        )
        // Health
        .route("/health", get(handlers::health::health_handler))
        .route("/ready", get(handlers::health::ready_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
