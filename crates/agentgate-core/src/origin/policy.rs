//! Origin policy evaluation.
//!
//! [`OriginEvaluator::evaluate`] is the reference path: it reads the raw
//! allow-list on every call. [`CompiledOriginPolicy`] parses the list once
//! (gateway startup) and must reach the same decision for the same inputs;
//! both funnel through the same decision routine.

use std::sync::OnceLock;

use super::allowlist::{allowed_entries, parse_allowed_origins, AllowedOrigins, DefaultOrigins};

/// Per-agent origin configuration, as stored with the agent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentOriginPolicy {
    pub origin_whitelist_enabled: bool,
    /// Comma-separated origins; empty means no explicit allow-list.
    pub allowed_origins: String,
}

impl AgentOriginPolicy {
    pub fn new(origin_whitelist_enabled: bool, allowed_origins: impl Into<String>) -> Self {
        Self {
            origin_whitelist_enabled,
            allowed_origins: allowed_origins.into(),
        }
    }

    /// Enforcement off: every origin, including none, is admitted.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Parse the allow-list once for repeated evaluation.
    pub fn compile(&self) -> CompiledOriginPolicy {
        CompiledOriginPolicy {
            enabled: self.origin_whitelist_enabled,
            listed: parse_allowed_origins(&self.allowed_origins),
        }
    }
}

/// Why a request was admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowReason {
    EnforcementDisabled,
    /// Present in the agent's own list.
    Listed,
    /// Present only in the default set.
    Default,
}

/// Why a request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    MissingOrigin,
    NotListed,
}

/// Decision from origin evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginDecision {
    Allow(AllowReason),
    Deny(DenyReason),
}

impl OriginDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, OriginDecision::Allow(_))
    }

    /// Stable label for logs and metrics.
    pub fn reason(self) -> &'static str {
        match self {
            OriginDecision::Allow(AllowReason::EnforcementDisabled) => "enforcement_disabled",
            OriginDecision::Allow(AllowReason::Listed) => "listed",
            OriginDecision::Allow(AllowReason::Default) => "default",
            OriginDecision::Deny(DenyReason::MissingOrigin) => "missing_origin",
            OriginDecision::Deny(DenyReason::NotListed) => "not_listed",
        }
    }

    pub fn as_str(self) -> &'static str {
        if self.is_allowed() { "allow" } else { "deny" }
    }
}

/// Agent policy with the allow-list already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledOriginPolicy {
    enabled: bool,
    listed: AllowedOrigins,
}

impl CompiledOriginPolicy {
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn listed(&self) -> &AllowedOrigins {
        &self.listed
    }

    pub fn evaluate(&self, defaults: &DefaultOrigins, origin: Option<&str>) -> OriginDecision {
        decide(self.enabled, |o| self.listed.contains(o), defaults, origin)
    }
}

/// Evaluates agent policies against an injected default origin set.
#[derive(Debug, Clone, Default)]
pub struct OriginEvaluator {
    defaults: DefaultOrigins,
}

impl OriginEvaluator {
    pub fn new(defaults: DefaultOrigins) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &DefaultOrigins {
        &self.defaults
    }

    pub fn evaluate(&self, policy: &AgentOriginPolicy, origin: Option<&str>) -> OriginDecision {
        decide(
            policy.origin_whitelist_enabled,
            |o| allowed_entries(&policy.allowed_origins).any(|e| e == o),
            &self.defaults,
            origin,
        )
    }

    pub fn evaluate_compiled(&self, policy: &CompiledOriginPolicy, origin: Option<&str>) -> OriginDecision {
        policy.evaluate(&self.defaults, origin)
    }

    pub fn is_allowed(&self, policy: &AgentOriginPolicy, origin: Option<&str>) -> bool {
        self.evaluate(policy, origin).is_allowed()
    }
}

/// Decide against the built-in default origins.
pub fn is_origin_allowed(policy: &AgentOriginPolicy, origin: Option<&str>) -> bool {
    static BUILTIN: OnceLock<OriginEvaluator> = OnceLock::new();
    BUILTIN.get_or_init(OriginEvaluator::default).is_allowed(policy, origin)
}

fn decide(
    enabled: bool,
    listed: impl Fn(&str) -> bool,
    defaults: &DefaultOrigins,
    origin: Option<&str>,
) -> OriginDecision {
    if !enabled {
        return OriginDecision::Allow(AllowReason::EnforcementDisabled);
    }

    let Some(origin) = origin else {
        return OriginDecision::Deny(DenyReason::MissingOrigin);
    };

    let decision = if listed(origin) {
        OriginDecision::Allow(AllowReason::Listed)
    } else if defaults.contains(origin) {
        OriginDecision::Allow(AllowReason::Default)
    } else {
        OriginDecision::Deny(DenyReason::NotListed)
    };

    tracing::trace!(%origin, reason = decision.reason(), "origin evaluated");
    decision
}
