// HTTP API error types; every variant renders as a failure envelope
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt::Display;
use thiserror::Error;

use crate::api::Envelope;
use crate::middleware::auth::TokenRejection;

pub const FIELDS_REQUIRED: &str = "Semua field harus diisi!";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, expired or forged credential
    #[error("{0}")]
    Token(TokenRejection),

    /// 400 Bad Request, nothing was sent to the database
    #[error("{0}")]
    Validation(String),

    /// Unexpected failure; `message` is the resource-specific "Gagal ..." text
    /// and `error` the raw diagnostic.
    #[error("{message}: {error}")]
    Failed { message: String, error: String },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn fields_required() -> Self {
        ApiError::Validation(FIELDS_REQUIRED.to_string())
    }

    pub fn failed(message: impl Into<String>, error: impl Display) -> Self {
        ApiError::Failed {
            message: message.into(),
            error: error.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            // All three credential failures share 500
            ApiError::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_envelope(&self) -> Envelope {
        match self {
            ApiError::Token(rejection) => Envelope::rejected(self.status_code(), rejection.message()),
            ApiError::Validation(message) => Envelope::rejected(self.status_code(), message.as_str()),
            ApiError::Failed { message, error } => Envelope::failed(message.as_str(), error.as_str()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Token(rejection) => tracing::warn!("Request rejected: {}", rejection.message()),
            ApiError::Validation(message) => tracing::warn!("Validation failed: {}", message),
            ApiError::Failed { message, error } => tracing::error!("{}: {}", message, error),
        }
        self.to_envelope().into_response()
    }
}

/// Attach the endpoint's failure message to any displayable error.
pub trait OrFail<T> {
    fn or_fail(self, message: &str) -> Result<T, ApiError>;
}

impl<T, E: Display> OrFail<T> for Result<T, E> {
    fn or_fail(self, message: &str) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::failed(message, e))
    }
}
