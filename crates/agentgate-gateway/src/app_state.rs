//! Shared application state for the agentgate gateway.

use std::collections::HashMap;
use std::sync::Arc;

use agentgate_core::error::Result;
use agentgate_core::origin::OriginEvaluator;

use crate::config::GatewayConfig;
use crate::context::agent::AgentRuntime;
use crate::obs::metrics::GatewayMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<GatewayMetrics>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    evaluator: OriginEvaluator,
    agents: HashMap<String, Arc<AgentRuntime>>,
    api_keys: HashMap<String, String>,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        cfg.validate()?;

        let evaluator = OriginEvaluator::new(cfg.origins.default_origins());

        let mut agents = HashMap::new();
        let mut api_keys = HashMap::new();
        for a in &cfg.agents {
            let runtime = AgentRuntime::new(a);
            if runtime.origin_policy().enabled() && runtime.origin_policy().listed().is_empty() {
                tracing::info!(agent = %a.id, "origin whitelist enabled with empty list; only default origins admitted");
            }
            agents.insert(a.id.clone(), Arc::new(runtime));
            api_keys.insert(a.api_key.clone(), a.id.clone());
        }

        tracing::info!(
            agents = agents.len(),
            default_origins = evaluator.defaults().len(),
            "agent registry compiled"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, evaluator, agents, api_keys }),
            metrics: Arc::new(GatewayMetrics::default()),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn evaluator(&self) -> &OriginEvaluator {
        &self.inner.evaluator
    }

    pub fn agent(&self, agent_id: &str) -> Option<Arc<AgentRuntime>> {
        self.inner.agents.get(agent_id).cloned()
    }

    pub fn agent_by_key(&self, api_key: &str) -> Option<Arc<AgentRuntime>> {
        let id = self.inner.api_keys.get(api_key)?;
        self.agent(id)
    }

    pub fn metrics(&self) -> &GatewayMetrics {
        &self.metrics
    }
}
