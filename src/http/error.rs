//! Error taxonomy for the movie HTTP handlers.

use std::error::Error;
use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use super::codec::{json_response, DecodeError, ErrorResponse};
use crate::error::StoreError;

/// Everything a handler can reject a request with.
#[derive(Debug)]
pub enum ApiError {
    /// The path suffix after `/movies/` is not an integer.
    InvalidId,
    /// A query parameter could not be parsed.
    InvalidQuery(&'static str),
    /// POST without a JSON content type.
    UnsupportedMediaType,
    /// Body could not be decoded, or the candidate broke field rules.
    Validation(Vec<String>),
    /// No movie with the requested id.
    NotFound,
    /// Store failure; reported to the client as a bare 500.
    Internal(StoreError),
    /// A handler panicked; reported like `Internal`.
    Panicked(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidId => write!(f, "invalid ID"),
            ApiError::InvalidQuery(name) => write!(f, "invalid query parameter '{}'", name),
            ApiError::UnsupportedMediaType => write!(f, "unsupported media type"),
            ApiError::Validation(_) => write!(f, "validation failed"),
            ApiError::NotFound => write!(f, "movie not found"),
            ApiError::Internal(_) | ApiError::Panicked(_) => write!(f, "internal server error"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiError::Internal(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err)
    }
}

impl From<DecodeError> for ApiError {
    fn from(err: DecodeError) -> Self {
        ApiError::Validation(vec![err.detail().to_string()])
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) | ApiError::Panicked(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The JSON envelope sent to the client.
    pub fn to_body(&self) -> ErrorResponse {
        match self {
            ApiError::Validation(details) => {
                ErrorResponse::with_details(self.to_string(), details.clone())
            }
            _ => ErrorResponse::new(self.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::Internal(source) => error!(error = %source, "request failed"),
            ApiError::Panicked(message) => error!(panic = %message, "handler panicked"),
            _ => warn!(status = status.as_u16(), error = %self, "request rejected"),
        }
        json_response(status, &self.to_body())
    }
}
