//! Translation of domain errors into HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::error;

use crate::domain::LedgerError;
use shared::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("{0}")]
    Unauthorized(&'static str),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Ledger(LedgerError::StudentNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Ledger(e) if e.is_validation() => StatusCode::BAD_REQUEST,
            ApiError::Ledger(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Ledger(e) => e.code(),
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            ApiError::Ledger(LedgerError::Storage(e)) => {
                // Details stay in the log
                error!("Storage failure: {:?}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorResponse {
            error: message,
            code: self.code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}
