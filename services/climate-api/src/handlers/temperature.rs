//! Temperature aggregate handlers.
//!
//! Both endpoints compute MIN/MAX/AVG of the temperature observation over
//! a date-filtered row set across all stations, and always return a
//! one-element array. With no matching rows the aggregate fields are null.

use axum::{
    extract::{Extension, Path},
    response::Response,
};
use serde::Serialize;
use std::sync::Arc;

use storage::TobsSummary;

use crate::handlers::{climate_error_response, json_response, parse_date_param};
use crate::state::AppState;

/// Aggregate record for an open-ended range query.
#[derive(Debug, Serialize)]
pub struct StartSummaryRecord {
    pub date: String,
    #[serde(rename = "TMIN")]
    pub tmin: Option<f64>,
    #[serde(rename = "TMAX")]
    pub tmax: Option<f64>,
    #[serde(rename = "TAVG")]
    pub tavg: Option<f64>,
}

/// Aggregate record for a bounded range query.
#[derive(Debug, Serialize)]
pub struct RangeSummaryRecord {
    pub date_start: String,
    pub date_end: String,
    #[serde(rename = "TMIN")]
    pub tmin: Option<f64>,
    #[serde(rename = "TMAX")]
    pub tmax: Option<f64>,
    #[serde(rename = "TAVG")]
    pub tavg: Option<f64>,
}

/// GET /api/v1.0/:start
///
/// MIN/MAX/AVG temperature for all dates on or after `start`.
pub async fn start_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(start): Path<String>,
) -> Response {
    let start_date = match parse_date_param(&start) {
        Ok(date) => date,
        Err(response) => return response,
    };

    match state.catalog.temperature_summary(start_date, None).await {
        Ok(summary) => {
            let record = StartSummaryRecord {
                date: format!("Greater than {}", start),
                tmin: summary.tmin,
                tmax: summary.tmax,
                tavg: summary.tavg,
            };
            json_response(&vec![record])
        }
        Err(e) => {
            tracing::error!("temperature summary query failed: {}", e);
            climate_error_response(&e)
        }
    }
}

/// GET /api/v1.0/:start/:end
///
/// MIN/MAX/AVG temperature for dates between `start` and `end` inclusive.
/// A start after the end is well-formed and yields the null aggregate row.
pub async fn start_end_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Response {
    let start_date = match parse_date_param(&start) {
        Ok(date) => date,
        Err(response) => return response,
    };
    let end_date = match parse_date_param(&end) {
        Ok(date) => date,
        Err(response) => return response,
    };

    let result = state
        .catalog
        .temperature_summary(start_date, Some(end_date))
        .await;

    match result {
        Ok(summary) => json_response(&vec![range_record(&start, &end, summary)]),
        Err(e) => {
            tracing::error!("temperature summary query failed: {}", e);
            climate_error_response(&e)
        }
    }
}

fn range_record(start: &str, end: &str, summary: TobsSummary) -> RangeSummaryRecord {
    RangeSummaryRecord {
        date_start: start.to_string(),
        date_end: end.to_string(),
        tmin: summary.tmin,
        tmax: summary.tmax,
        tavg: summary.tavg,
    }
}
