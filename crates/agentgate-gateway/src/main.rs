//! agentgate gateway binary.
//!
//! - Origin check endpoints: /v1/agents/:agent_id/access, /v1/access
//! - Ops: /healthz, /metrics
//! - Config path from `AGENTGATE_CONFIG` (default `agentgate.yaml`)

use tracing_subscriber::{fmt, EnvFilter};

use agentgate_core::error::{AgentGateError, Result};
use agentgate_gateway::{app_state, config, router};

const CONFIG_ENV: &str = "AGENTGATE_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "agentgate.yaml";

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, code = e.client_code().as_str(), "agentgate-gateway failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.gateway.socket_addr()?;

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, config = %path, "agentgate-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| AgentGateError::Internal(format!("bind failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| AgentGateError::Internal(format!("server failed: {e}")))
}
