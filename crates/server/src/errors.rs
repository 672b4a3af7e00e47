use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sea_orm::TransactionError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use service::errors::ServiceError;

/// Wire shape shared by every failure response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub message: String,
    pub status_code: u16,
    pub error_type: &'static str,
}

/// Boundary error taxonomy. Each kind carries a message and maps to a fixed
/// status and errorType label. Unauthorized, Forbidden, Conflict and
/// UnsupportedOperation are reserved for future policy checks.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    UnsupportedOperation(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::UnsupportedOperation(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "Resource not found",
            ApiError::Validation(_) => "Bad request error",
            ApiError::Unauthorized(_) => "Authorized validation error",
            ApiError::Forbidden(_) => "Access denied error",
            ApiError::Conflict(_) => "Request conflicts error",
            ApiError::UnsupportedOperation(_) => "Unsupported operation error",
            ApiError::Internal(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            message: self.to_string(),
            status_code: status.as_u16(),
            error_type: self.error_type(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::Validation(msg) => ApiError::Validation(msg),
            ServiceError::Model(m) => ApiError::Validation(m.to_string()),
            ServiceError::Db(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<TransactionError<ServiceError>> for ApiError {
    fn from(e: TransactionError<ServiceError>) -> Self {
        match e {
            TransactionError::Connection(db) => ApiError::Internal(db.to_string()),
            TransactionError::Transaction(svc) => svc.into(),
        }
    }
}
