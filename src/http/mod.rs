//! HTTP transport for the movie store.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use moviehub::{http, MoviesStore};
//!
//! let store = Arc::new(MoviesStore::new());
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(store.clone());
//!
//! // Or run it as a standalone server
//! let server = http::MoviesServer::start(store, "0.0.0.0:8080").await?;
//! ```

mod codec;
mod error;
mod guard;
mod routes;
mod server;

pub use codec::{decode_movie, DecodeError, ErrorResponse, JSON_CONTENT_TYPE};
pub use error::ApiError;
pub use routes::router;
pub use server::MoviesServer;
