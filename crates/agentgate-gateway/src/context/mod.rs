//! Agent context types shared across layers.
//!
//! Handlers resolve an [`agent::AgentRuntime`] first and then hand it to the
//! origin guard, so the guard never touches config or lookup tables.

pub mod agent;
