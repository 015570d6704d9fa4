//! Shared error type across agentgate crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request or config.
    BadRequest,
    /// API key did not resolve to an agent.
    AuthFailed,
    /// Unknown agent.
    NotFound,
    /// Request origin rejected by the agent's whitelist.
    OriginNotAllowed,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::AuthFailed => "AUTH_FAILED",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::OriginNotAllowed => "ORIGIN_NOT_ALLOWED",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }

    /// HTTP status the request layer answers with.
    pub fn http_status(self) -> u16 {
        match self {
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => 400,
            ClientCode::AuthFailed => 401,
            ClientCode::OriginNotAllowed => 403,
            ClientCode::NotFound => 404,
            ClientCode::Internal => 500,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, AgentGateError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum AgentGateError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("auth failed")]
    AuthFailed,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("origin not allowed: {0}")]
    OriginNotAllowed(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl AgentGateError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            AgentGateError::BadRequest(_) => ClientCode::BadRequest,
            AgentGateError::AuthFailed => ClientCode::AuthFailed,
            AgentGateError::NotFound(_) => ClientCode::NotFound,
            AgentGateError::OriginNotAllowed(_) => ClientCode::OriginNotAllowed,
            AgentGateError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            AgentGateError::Internal(_) => ClientCode::Internal,
        }
    }
}
