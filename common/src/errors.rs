//! Application error types.
//!
//! All fallible operations across the workspace return [`AppResult`]. The
//! error converts into an HTTP response carrying an [`ApiResponse`] body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::ApiResponse;

/// Result alias used throughout the services.
pub type AppResult<T> = Result<T, AppError>;

/// Unified application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Saved connection id is unknown.
    #[error("Connection not found: {0}")]
    ConnectionNotFound(String),

    /// Could not reach the target database.
    #[error("{0}")]
    DatabaseConnection(String),

    /// Driver reported an error while running a statement.
    #[error("{0}")]
    DatabaseQuery(String),

    /// Request payload failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation is not available for this engine.
    #[error("Unsupported: {0}")]
    UnsupportedDatabaseType(String),

    /// Template registry has no entry for the key.
    #[error("No such template: {0}")]
    TemplateNotFound(String),

    /// DataTable shape violation (add row, merge, transpose, select).
    #[error("{0}")]
    DataTable(String),

    /// Catalog object vanished between listing and inspection.
    #[error("{0}")]
    ObjectNotFound(String),

    /// Anything else.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable error code used in API responses.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ConnectionNotFound(_) => "CONNECTION_NOT_FOUND",
            AppError::DatabaseConnection(_) => "DATABASE_CONNECTION_ERROR",
            AppError::DatabaseQuery(_) => "DATABASE_QUERY_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::UnsupportedDatabaseType(_) => "UNSUPPORTED",
            AppError::TemplateNotFound(_) => "TEMPLATE_NOT_FOUND",
            AppError::DataTable(_) => "DATA_TABLE_ERROR",
            AppError::ObjectNotFound(_) => "OBJECT_NOT_FOUND",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ConnectionNotFound(_)
            | AppError::TemplateNotFound(_)
            | AppError::ObjectNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedDatabaseType(_) => StatusCode::NOT_IMPLEMENTED,
            AppError::DatabaseConnection(_) => StatusCode::BAD_GATEWAY,
            AppError::DatabaseQuery(_) | AppError::DataTable(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                AppError::DatabaseConnection(err.to_string())
            }
            other => AppError::DatabaseQuery(other.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = self.code(), error = %self, "请求处理失败");
        } else {
            tracing::warn!(code = self.code(), error = %self, "请求处理失败");
        }
        let body = ApiResponse::err(self.code(), self.to_string());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::ConnectionNotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Validation("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UnsupportedDatabaseType("oracle".into()).status(),
            StatusCode::NOT_IMPLEMENTED
        );
    }

    #[test]
    fn test_driver_message_is_passed_through() {
        let err = AppError::DatabaseQuery("near \"selec\": syntax error".into());
        assert_eq!(err.to_string(), "near \"selec\": syntax error");
    }
}
