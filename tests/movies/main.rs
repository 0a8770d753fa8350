//! Movie service integration tests.

#[cfg(feature = "http")]
mod support;

#[cfg(feature = "http")]
mod server;
