use axum::{
    http::StatusCode,
    response::{IntoResponse, Response, Json},
};
use thiserror::Error;

use crate::models::{ErrorResponse, ErrorDetail};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing required query parameter 'path'")]
    MissingPath,

    #[error("Invalid scope: {0}")]
    InvalidScope(String),

    #[error("Tag error: {0}")]
    TagError(#[from] resource_taglib::TagError),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::MissingPath => (StatusCode::BAD_REQUEST, "MISSING_PATH"),
            ApiError::InvalidScope(_) => (StatusCode::BAD_REQUEST, "INVALID_SCOPE"),
            ApiError::TagError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "TAG_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!("resource include failed: {}", self);
        }

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(error_response)).into_response()
    }
}
