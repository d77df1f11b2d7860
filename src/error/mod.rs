//! Application error types, mapped to HTTP responses at the handler boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidBody(String),

    #[error("content type 'application/json' required")]
    UnsupportedMediaType,

    #[error("not found")]
    NotFound,

    #[error("invalid method")]
    MethodNotAllowed,

    #[error("{0}")]
    BodyRead(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::BodyRead(_) | AppError::Serialization(_) | AppError::Db(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::Serialization(e) = &self {
            // Response encoding failed; nothing sensible to put in the body.
            error!(error = %e, "failed to encode response");
            return status.into_response();
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
