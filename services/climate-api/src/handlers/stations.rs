//! Station listing handler.

use axum::{extract::Extension, response::Response};
use std::sync::Arc;

use crate::handlers::{climate_error_response, json_response};
use crate::state::AppState;

/// GET /api/v1.0/stations
///
/// All stations as `(station_id, name)`, ordered by station identifier.
pub async fn stations_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    match state.catalog.list_stations().await {
        Ok(rows) => json_response(&rows),
        Err(e) => {
            tracing::error!("stations query failed: {}", e);
            climate_error_response(&e)
        }
    }
}
