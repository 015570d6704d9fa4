//! Origin whitelist evaluation.
//!
//! An agent carries an [`AgentOriginPolicy`]: an enforcement flag plus a
//! comma-separated allow-list. When enforcement is on, a request is admitted
//! only if its declared origin is in that list or in the deployment's
//! [`DefaultOrigins`]. Matching is exact-string.

pub mod allowlist;
pub mod policy;

pub use allowlist::{
    allowed_entries, parse_allowed_origins, AllowedOrigins, DefaultOrigins, BUILTIN_DEFAULT_ORIGINS,
};
pub use policy::{
    is_origin_allowed, AgentOriginPolicy, AllowReason, CompiledOriginPolicy, DenyReason,
    OriginDecision, OriginEvaluator,
};
