//! HTTP API: access checks and the JSON error surface.

pub mod access;
pub mod error;

pub use error::ApiError;
