mod error;
mod movie;
mod store;
pub mod validation;

#[cfg(feature = "http")]
pub mod config;
#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "http")]
pub mod telemetry;

pub use error::StoreError;
pub use movie::{Movie, NewMovie};
pub use store::MoviesStore;
pub use validation::validate;
