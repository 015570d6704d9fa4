//! Origin guard.
//!
//! Reads the request's `Origin` header and runs the agent's compiled policy
//! through the shared evaluator. A header that is empty or not valid UTF-8
//! counts as absent.

use axum::http::{header, HeaderMap};

use agentgate_core::error::{AgentGateError, Result};
use agentgate_core::origin::OriginDecision;

use crate::app_state::AppState;
use crate::context::agent::AgentRuntime;

pub fn request_origin(headers: &HeaderMap) -> Option<String> {
    let v = headers.get(header::ORIGIN)?.to_str().ok()?;
    if v.is_empty() {
        return None;
    }
    Some(v.to_string())
}

/// Evaluate and record the decision. Denials become `OriginNotAllowed`.
pub fn admit(state: &AppState, agent: &AgentRuntime, origin: Option<&str>) -> Result<OriginDecision> {
    let decision = state.evaluator().evaluate_compiled(agent.origin_policy(), origin);

    state.metrics().origin_decisions.inc(&[
        ("agent", agent.agent_id.as_str()),
        ("decision", decision.as_str()),
        ("reason", decision.reason()),
    ]);

    if decision.is_allowed() {
        tracing::debug!(agent = %agent.agent_id, origin = origin.unwrap_or("-"), reason = decision.reason(), "origin admitted");
        return Ok(decision);
    }

    tracing::warn!(agent = %agent.agent_id, origin = origin.unwrap_or("-"), reason = decision.reason(), "origin rejected");
    Err(AgentGateError::OriginNotAllowed(match origin {
        Some(o) => o.to_string(),
        None => "missing Origin header".to_string(),
    }))
}
