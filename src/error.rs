use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::services::ProviderError;

pub type ScreeningResult<T> = Result<T, ScreeningError>;

/// Failures of a screening request
///
/// Each variant maps to exactly one HTTP status and a fixed public message.
/// The `Display` text carries the detail and is only ever logged.
#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingField(Vec<String>),

    #[error("Screening provider unavailable: {0}")]
    ProviderUnavailable(#[source] ProviderError),

    #[error("Malformed provider response: {0}")]
    MalformedProviderResponse(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ScreeningError {
    /// Message returned to the client
    pub fn public_message(&self) -> &'static str {
        match self {
            ScreeningError::MissingField(_) => "Missing required fields",
            ScreeningError::ProviderUnavailable(_) => "Bad Gateway - External API Error",
            ScreeningError::MalformedProviderResponse(_) => "Unexpected API Response Format",
            ScreeningError::InternalError(_) => "Internal Server Error",
        }
    }
}

impl From<ProviderError> for ScreeningError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::InvalidResponse(msg) => ScreeningError::MalformedProviderResponse(msg),
            ProviderError::RequestError(e) if e.is_builder() => {
                ScreeningError::InternalError(format!("Failed to build provider request: {}", e))
            }
            other => ScreeningError::ProviderUnavailable(other),
        }
    }
}

impl ResponseError for ScreeningError {
    fn status_code(&self) -> StatusCode {
        match self {
            ScreeningError::MissingField(_) => StatusCode::BAD_REQUEST,
            ScreeningError::ProviderUnavailable(_) => StatusCode::BAD_GATEWAY,
            ScreeningError::MalformedProviderResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ScreeningError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ScreeningError::MissingField(_) => tracing::info!("{}", self),
            ScreeningError::ProviderUnavailable(_) => tracing::warn!("{}", self),
            _ => tracing::error!("{}", self),
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_message().to_string(),
        })
    }
}
