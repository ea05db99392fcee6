//! Application and storage error types.
//!
//! [`StoreError`] is what repositories return; it keeps "alias already taken"
//! apart from "store unreachable" so the alias allocator can retry the former
//! and fail fast on the latter. [`AppError`] is what handlers return and knows
//! how to render itself as an HTTP response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::utils::db_error::is_unique_violation_on_short;

/// Errors raised by [`crate::domain::repositories::UrlRepository`] implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Another record already uses this short alias.
    #[error("alias '{0}' is already taken")]
    AliasTaken(String),

    /// The backing store could not serve the request.
    #[error("store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),
}

impl StoreError {
    /// Classifies a sqlx error raised while inserting `alias`.
    pub fn from_insert(err: sqlx::Error, alias: &str) -> Self {
        if is_unique_violation_on_short(&err) {
            Self::AliasTaken(alias.to_string())
        } else {
            Self::Unavailable(err)
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Unavailable(err)
    }
}

/// Serializable error payload, also embedded in the response body.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AliasTaken(alias) => {
                AppError::conflict("Alias already taken", json!({ "alias": alias }))
            }
            // Driver errors can carry connection details; keep them out of the body.
            StoreError::Unavailable(_) => AppError::internal("Store unavailable", json!({})),
        }
    }
}
