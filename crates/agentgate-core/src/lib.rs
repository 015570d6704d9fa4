//! agentgate core: origin policy evaluation and the shared error surface.
//!
//! This crate decides whether a request declaring a given `Origin` may reach
//! an agent. It carries no transport or runtime dependencies so the same
//! evaluator can back an HTTP gateway, a worker, or a test harness.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Evaluation is total: every input produces a decision.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod origin;

/// Shared result type.
pub use error::{AgentGateError, Result};
pub use origin::{
    is_origin_allowed, AgentOriginPolicy, DefaultOrigins, OriginDecision, OriginEvaluator,
};
