//! JSON error responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use agentgate_core::error::AgentGateError;

/// Wraps the core error so handlers can use `?` and still answer with
/// `{"code": .., "msg": ..}` plus the status mapped from the client code.
#[derive(Debug)]
pub struct ApiError(pub AgentGateError);

impl From<AgentGateError> for ApiError {
    fn from(e: AgentGateError) -> Self {
        Self(e)
    }
}

/// Malformed bodies and missing `Content-Type` surface as `BAD_REQUEST`
/// instead of axum's plain-text 415/422.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AgentGateError::BadRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = StatusCode::from_u16(code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = json!({
            "code": code.as_str(),
            "msg": self.0.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
