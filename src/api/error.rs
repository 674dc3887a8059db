use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::logic::{RequestError, RequestErrorKind};

/// Error body shared by every endpoint
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub timestamp: String,
    pub status: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            status: "error".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Request(err) => match err.kind() {
                RequestErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
                RequestErrorKind::MalformedParameter
                | RequestErrorKind::UnknownReference
                | RequestErrorKind::IncompatibleCombination => StatusCode::BAD_REQUEST,
            },
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::Store(e) => log::error!("Store error: {:#}", e),
            ApiError::Request(e) => log::debug!("Rejected request ({:?}): {}", e.kind(), e),
        }
        (status, Json(ErrorResponse::new(&self.to_string()))).into_response()
    }
}
