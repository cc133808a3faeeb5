//! Precipitation listing handler.

use axum::{extract::Extension, response::Response};
use std::sync::Arc;

use crate::handlers::{climate_error_response, json_response};
use crate::state::AppState;

/// GET /api/v1.0/precipitation
///
/// All `(date, prcp)` pairs in the dataset, ordered by date ascending.
/// `prcp` is null for rows without a precipitation reading.
pub async fn precipitation_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    match state.catalog.list_precipitation().await {
        Ok(rows) => json_response(&rows),
        Err(e) => {
            tracing::error!("precipitation query failed: {}", e);
            climate_error_response(&e)
        }
    }
}
