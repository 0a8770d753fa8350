//! JSON in and out of the HTTP layer.
//!
//! Request bodies decode into a typed [`NewMovie`] with a tagged
//! [`DecodeError`]; responses are written with the fixed
//! `application/json; charset=UTF-8` content type.

use std::fmt;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use tracing::error;

use crate::movie::NewMovie;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

const JSON_MEDIA_TYPE: &str = "application/json";

/// Body of every non-2xx JSON response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default)]
    pub details: Vec<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Vec::new(),
        }
    }

    pub fn with_details(error: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            error: error.into(),
            details,
        }
    }
}

/// Why a POST body could not be turned into a candidate movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Nothing but whitespace, or the JSON literal `null`.
    EmptyBody,
    /// Not well-formed JSON.
    InvalidJson,
    /// Well-formed JSON that is not a movie object (wrong types, not an object).
    InvalidShape,
}

impl DecodeError {
    /// Client-facing detail message.
    pub fn detail(&self) -> &'static str {
        match self {
            DecodeError::EmptyBody => "empty request body",
            DecodeError::InvalidJson => "invalid JSON",
            DecodeError::InvalidShape => "could not parse request body",
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.detail())
    }
}

impl std::error::Error for DecodeError {}

/// Wire shape of a POST body. Unknown fields, including `id`, are ignored.
#[derive(Deserialize)]
struct MoviePayload {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    year: i32,
}

/// Decode a request body into a candidate movie.
///
/// A missing or `null` title becomes an empty title and a missing year
/// becomes 0; both are left for validation to reject.
pub fn decode_movie(body: &[u8]) -> Result<NewMovie, DecodeError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(DecodeError::EmptyBody);
    }

    let payload: Option<MoviePayload> =
        serde_json::from_slice(body).map_err(|err| match err.classify() {
            Category::Data => DecodeError::InvalidShape,
            Category::Syntax | Category::Eof | Category::Io => DecodeError::InvalidJson,
        })?;

    let payload = payload.ok_or(DecodeError::EmptyBody)?;
    Ok(NewMovie::new(payload.title.unwrap_or_default(), payload.year))
}

/// Whether the request declares a JSON body. Case-insensitive substring
/// match, so `application/json; charset=utf-8` qualifies.
pub fn is_json_request(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_ascii_lowercase().contains(JSON_MEDIA_TYPE))
        .unwrap_or(false)
}

/// Serialize `value` as the response body with the JSON content type.
pub fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(bytes) => (
            status,
            [(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
            bytes,
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "failed to encode response body");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
