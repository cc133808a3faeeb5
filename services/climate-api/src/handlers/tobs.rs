//! Temperature observation handler for the most active station.

use axum::{extract::Extension, response::Response};
use std::sync::Arc;

use crate::config;
use crate::handlers::{climate_error_response, json_response};
use crate::state::AppState;

/// GET /api/v1.0/tobs
///
/// The last year of temperature observations for the most active station,
/// ordered by date ascending. The station and the end of the window are
/// fixed reference points from an offline dataset analysis (see `config`).
pub async fn tobs_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let result = state
        .catalog
        .station_observations(config::MOST_ACTIVE_STATION, config::tobs_window_start())
        .await;

    match result {
        Ok(rows) => json_response(&rows),
        Err(e) => {
            tracing::error!("tobs query failed: {}", e);
            climate_error_response(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use storage::ObservationRow;

    #[test]
    fn test_record_serialization() {
        let row = ObservationRow {
            date: "2016-08-19".to_string(),
            temp: 74.0,
        };
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"date":"2016-08-19","temp":74.0}"#);
    }
}
