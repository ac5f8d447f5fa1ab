use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::{debug, error, warn};

/// Body sent for every failure except a missing row. Existing clients match on it.
pub const DATABASE_ERROR_BODY: &str = "Database Error";

#[derive(Debug, ThisError)]
pub enum CovidError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("{0} not found")]
    NotFound(&'static str),

    /// Path could not be read. Collapses into the store failure response.
    #[error("Invalid path parameter: {0}")]
    InvalidPath(#[from] PathRejection),

    /// Body was not a JSON object. Collapses into the store failure response.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl CovidError {
    pub fn status(&self) -> StatusCode {
        match self {
            CovidError::NotFound(_) => StatusCode::NOT_FOUND,
            CovidError::Database(_) | CovidError::InvalidPath(_) | CovidError::InvalidBody(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for CovidError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            CovidError::Database(e) => {
                error!(error = %e, "statement failed");
                (status, DATABASE_ERROR_BODY).into_response()
            }
            CovidError::NotFound(what) => {
                debug!(resource = what, "no matching row");
                status.into_response()
            }
            CovidError::InvalidPath(e) => {
                warn!(error = %e, "unreadable path");
                (status, DATABASE_ERROR_BODY).into_response()
            }
            CovidError::InvalidBody(e) => {
                warn!(error = %e, "unreadable body");
                (status, DATABASE_ERROR_BODY).into_response()
            }
        }
    }
}
