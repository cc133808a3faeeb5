//! Error types for the climate query service.

use thiserror::Error;

/// Result type alias using ClimateError.
pub type ClimateResult<T> = Result<T, ClimateError>;

/// Primary error type for climate query operations.
#[derive(Debug, Error)]
pub enum ClimateError {
    // === Request Errors ===
    #[error("Invalid date '{value}': {message}")]
    InvalidDate { value: String, message: String },

    // === Storage Errors ===
    #[error("Database error: {0}")]
    DatabaseError(String),

    // === Infrastructure Errors ===
    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl ClimateError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            ClimateError::InvalidDate { .. } => 400,
            ClimateError::ServiceUnavailable(_) => 503,
            _ => 500,
        }
    }
}

// Conversion from common error types
impl From<std::io::Error> for ClimateError {
    fn from(err: std::io::Error) -> Self {
        ClimateError::InternalError(err.to_string())
    }
}

impl From<serde_json::Error> for ClimateError {
    fn from(err: serde_json::Error) -> Self {
        ClimateError::InternalError(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let err = ClimateError::InvalidDate {
            value: "not-a-date".to_string(),
            message: "expected YYYY-MM-DD".to_string(),
        };
        assert_eq!(err.http_status_code(), 400);

        assert_eq!(
            ClimateError::DatabaseError("boom".to_string()).http_status_code(),
            500
        );
        assert_eq!(
            ClimateError::ServiceUnavailable("starting".to_string()).http_status_code(),
            503
        );
    }

    #[test]
    fn test_display_includes_value() {
        let err = ClimateError::InvalidDate {
            value: "2017-13-40".to_string(),
            message: "not a calendar date".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2017-13-40"));
        assert!(msg.contains("not a calendar date"));
    }
}
