//! HTTP request handlers for the climate API.

pub mod health;
pub mod landing;
pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod tobs;

use axum::{
    http::{header, StatusCode},
    response::Response,
};
use chrono::NaiveDate;
use serde::Serialize;

use climate_common::ClimateError;

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ExceptionBody {
    pub code: String,
    pub description: String,
}

/// Build a JSON error response.
pub(crate) fn error_response(status: StatusCode, code: &str, description: String) -> Response {
    let body = ExceptionBody {
        code: code.to_string(),
        description,
    };
    let json = serde_json::to_string(&body).unwrap_or_default();

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(json.into())
        .unwrap()
}

/// Build a 200 JSON response from a serializable value.
pub(crate) fn json_response(value: &impl Serialize) -> Response {
    let json = serde_json::to_string_pretty(value).unwrap_or_default();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .body(json.into())
        .unwrap()
}

/// Convert a service error into its JSON error response.
pub(crate) fn climate_error_response(err: &ClimateError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let code = match err {
        ClimateError::InvalidDate { .. } => "InvalidDate",
        ClimateError::DatabaseError(_) => "DatabaseError",
        ClimateError::ServiceUnavailable(_) => "ServiceUnavailable",
        _ => "InternalError",
    };
    error_response(status, code, err.to_string())
}

/// Parse a `YYYY-MM-DD` path segment, rejecting malformed dates with a 400.
pub(crate) fn parse_date_param(value: &str) -> Result<NaiveDate, Response> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        climate_error_response(&ClimateError::InvalidDate {
            value: value.to_string(),
            message: "expected YYYY-MM-DD".to_string(),
        })
    })
}
