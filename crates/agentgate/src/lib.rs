//! Top-level facade crate for agentgate.
//!
//! Re-exports the origin policy core and the gateway library so users can
//! depend on a single crate.

pub mod core {
    pub use agentgate_core::*;
}

pub mod gateway {
    pub use agentgate_gateway::*;
}

pub use agentgate_core::origin::{is_origin_allowed, AgentOriginPolicy};
