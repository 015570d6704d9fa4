//! Access check endpoints.
//!
//! - `GET  /v1/agents/:agent_id/access` : agent addressed by id
//! - `POST /v1/access` `{"api_key": ..}` : agent addressed by key
//!
//! Both answer 200 with the admitting reason, or an error from [`ApiError`].

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};

use agentgate_core::origin::OriginDecision;

use crate::api::ApiError;
use crate::app_state::AppState;
use crate::context::agent::{resolve_agent, resolve_agent_by_key, AgentRuntime};
use crate::guard;

#[derive(Debug, Deserialize)]
pub struct KeyAccessRequest {
    pub api_key: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessResponse {
    pub status: String,
    pub agent: String,
    pub reason: String,
}

impl AccessResponse {
    fn allowed(agent: &AgentRuntime, decision: OriginDecision) -> Self {
        Self {
            status: "allowed".into(),
            agent: agent.agent_id.clone(),
            reason: decision.reason().into(),
        }
    }
}

pub async fn agent_access(
    State(state): State<AppState>,
    Path(agent_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<AccessResponse>, ApiError> {
    let agent = resolve_agent(&state, &agent_id)?;
    let origin = guard::request_origin(&headers);
    let decision = guard::admit(&state, &agent, origin.as_deref())?;
    Ok(Json(AccessResponse::allowed(&agent, decision)))
}

pub async fn key_access(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<KeyAccessRequest>, JsonRejection>,
) -> Result<Json<AccessResponse>, ApiError> {
    let Json(req) = payload?;
    let agent = resolve_agent_by_key(&state, &req.api_key)?;
    let origin = guard::request_origin(&headers);
    let decision = guard::admit(&state, &agent, origin.as_deref())?;
    Ok(Json(AccessResponse::allowed(&agent, decision)))
}
