//! Request guards applied before an agent is served.

pub mod origin;

pub use origin::{admit, request_origin};
