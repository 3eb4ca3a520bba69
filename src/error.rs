//! Error types for the catalog web front end

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure talking to the backend catalog API.
///
/// The display text is what staff see in the inline error banner, so it stays
/// human-readable: the HTTP status text or the transport error text.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend could not be reached (connection refused, DNS, reset...)
    #[error("Books API request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("Books API request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    /// The backend answered 2xx but the payload lacks `success`/`data`
    #[error("Books API returned an unexpected payload: {0}")]
    PayloadShape(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Template error: {0}")]
    Render(String),
}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        AppError::Render(format!("{:#}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        messages.sort();
        AppError::Validation(messages.join("; "))
    }
}

/// Only reached when a page itself cannot be produced; backend and
/// validation failures are rendered inline by the handlers.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Api(e) => {
                tracing::error!("Unhandled backend error: {}", e);
                (StatusCode::BAD_GATEWAY, e.to_string())
            }
            AppError::Render(msg) => {
                tracing::error!("Render error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
