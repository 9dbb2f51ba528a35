use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failures that end a single request
#[derive(Debug, Error)]
pub enum AppError {
    /// An operation needs a configuration value that was not provided
    #[error("Missing configuration: {0}")]
    MissingConfig(&'static str),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(json!({"error": self.to_string()})),
        )
            .into_response()
    }
}
