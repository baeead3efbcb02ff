//! Error types and HTTP surface mapping for the climate API

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Main error type for the climate API
#[derive(Error, Debug)]
pub enum ClimateApiError {
    /// A path segment did not parse as an ISO `YYYY-MM-DD` date
    #[error("Invalid date format. Please use YYYY-MM-DD.")]
    InvalidDate,

    /// The measurement relation holds no rows at all
    #[error("No measurement data available.")]
    EmptyDataset,

    /// Query execution errors from the underlying store
    #[error("Database error: {source}")]
    Database {
        #[from]
        source: sqlx::Error,
    },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl ClimateApiError {
    /// HTTP status this error surfaces as.
    ///
    /// Malformed input is the caller's fault; an empty archive is a fact
    /// about the data, not a server fault. Everything else is unreachable
    /// under an available, pre-populated store.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ClimateApiError::InvalidDate => StatusCode::BAD_REQUEST,
            ClimateApiError::EmptyDataset => StatusCode::NOT_FOUND,
            ClimateApiError::Database { .. } | ClimateApiError::Io { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ClimateApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
