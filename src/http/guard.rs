//! Turns a panicking handler into a 500 response.
//!
//! Each request runs in its own task; a panic there surfaces as a
//! `JoinError` instead of tearing down the connection.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::error::ApiError;

pub(crate) async fn panic_guard(request: Request, next: Next) -> Response {
    match tokio::spawn(next.run(request)).await {
        Ok(response) => response,
        Err(err) if err.is_panic() => {
            let payload = err.into_panic();
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            ApiError::Panicked(message).into_response()
        }
        Err(err) => ApiError::Panicked(err.to_string()).into_response(),
    }
}
