//! agentgate gateway library entry.
//!
//! This crate wires config, the agent registry, the origin guard, and the
//! HTTP surface into a gateway that admits or rejects requests per agent.
//! It is consumed by the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod context;
pub mod guard;
pub mod obs;
pub mod ops;
pub mod router;
