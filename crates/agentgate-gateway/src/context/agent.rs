use std::sync::Arc;

use agentgate_core::error::{AgentGateError, Result};
use agentgate_core::origin::CompiledOriginPolicy;

use crate::app_state::AppState;
use crate::config::AgentConfig;

/// Resolved agent runtime (id + compiled origin policy).
/// Built once at startup, then shared via Arc.
#[derive(Debug)]
pub struct AgentRuntime {
    pub agent_id: String,
    origin_policy: CompiledOriginPolicy,
}

impl AgentRuntime {
    pub fn new(cfg: &AgentConfig) -> Self {
        Self {
            agent_id: cfg.id.clone(),
            origin_policy: cfg.origin_policy().compile(),
        }
    }

    pub fn origin_policy(&self) -> &CompiledOriginPolicy {
        &self.origin_policy
    }
}

/// Resolve an agent by id or return a client-visible error.
pub fn resolve_agent(state: &AppState, agent_id: &str) -> Result<Arc<AgentRuntime>> {
    state.agent(agent_id).ok_or_else(|| {
        state.metrics().unknown_agent.inc(&[("lookup", "id")]);
        AgentGateError::NotFound(format!("unknown agent: {agent_id}"))
    })
}

/// Resolve an agent by API key. Unknown keys are an auth failure, not a 404.
pub fn resolve_agent_by_key(state: &AppState, api_key: &str) -> Result<Arc<AgentRuntime>> {
    state.agent_by_key(api_key).ok_or_else(|| {
        state.metrics().unknown_agent.inc(&[("lookup", "api_key")]);
        AgentGateError::AuthFailed
    })
}
