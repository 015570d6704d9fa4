use std::collections::HashSet;
use std::net::SocketAddr;

use agentgate_core::error::{AgentGateError, Result};
use agentgate_core::origin::{AgentOriginPolicy, DefaultOrigins};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub origins: OriginsSection,

    #[serde(default)]
    pub agents: Vec<AgentConfig>,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(AgentGateError::UnsupportedVersion);
        }
        if self.agents.is_empty() {
            return Err(AgentGateError::BadRequest("agents must not be empty".into()));
        }

        self.gateway.validate()?;

        let mut ids = HashSet::new();
        let mut keys = HashSet::new();
        for a in &self.agents {
            a.validate()?;
            if !ids.insert(a.id.as_str()) {
                return Err(AgentGateError::BadRequest(format!("duplicate agent id: {}", a.id)));
            }
            if !keys.insert(a.api_key.as_str()) {
                return Err(AgentGateError::BadRequest(format!(
                    "duplicate api_key (agent={})",
                    a.id
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            AgentGateError::BadRequest(format!("gateway.listen must be a socket address: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

/// Deployment-wide default origins.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OriginsSection {
    #[serde(default = "default_true")]
    pub use_builtin_defaults: bool,

    #[serde(default)]
    pub extra_defaults: Vec<String>,
}

impl Default for OriginsSection {
    fn default() -> Self {
        Self {
            use_builtin_defaults: true,
            extra_defaults: Vec::new(),
        }
    }
}

impl OriginsSection {
    pub fn default_origins(&self) -> DefaultOrigins {
        if self.use_builtin_defaults {
            DefaultOrigins::builtin_with(&self.extra_defaults)
        } else {
            DefaultOrigins::new(&self.extra_defaults)
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    pub id: String,
    pub api_key: String,

    #[serde(default)]
    pub origin_whitelist_enabled: bool,

    /// Comma-separated, same format the agent record stores.
    #[serde(default)]
    pub allowed_origins: String,
}

impl AgentConfig {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(AgentGateError::BadRequest("agent id must not be empty".into()));
        }
        if self.api_key.trim().is_empty() {
            return Err(AgentGateError::BadRequest(format!(
                "agent {} api_key must not be empty",
                self.id
            )));
        }
        Ok(())
    }

    pub fn origin_policy(&self) -> AgentOriginPolicy {
        AgentOriginPolicy::new(self.origin_whitelist_enabled, self.allowed_origins.clone())
    }
}
