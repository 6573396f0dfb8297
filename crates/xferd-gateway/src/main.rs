//! hakim-xferd: loopback file-read daemon.
//!
//! - `GET /health`   : effective policy, no auth
//! - `POST /v1/read` : bearer auth, then path validation, then base64 bytes
//!
//! Requests run one task per connection on the tokio runtime; the policy is
//! immutable and shared, so no locking is involved.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use xferd_gateway::{app_state, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let cli = config::Cli::parse();
    let cfg = match config::resolve(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "config load failed");
            return ExitCode::FAILURE;
        }
    };

    match run(cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cfg: config::ServerConfig) -> std::io::Result<()> {
    if !cfg.is_loopback() {
        tracing::warn!(host = %cfg.host, "binding to a non-loopback address");
    }

    let policy = &cfg.policy;
    if policy.allowed_roots().is_empty() {
        tracing::warn!("no allow root could be resolved; every read will be denied");
    }

    let listener = tokio::net::TcpListener::bind((cfg.host.as_str(), cfg.port)).await?;
    let listen = listener.local_addr()?;

    tracing::info!(
        %listen,
        roots = ?policy.allowed_roots(),
        exts = ?policy.allowed_extensions(),
        max_bytes = ?policy.max_bytes(),
        auth = policy.auth_secret().is_some(),
        "hakim-xferd starting"
    );

    let state = app_state::AppState::new(cfg.policy);
    let app = router::build_router(state);

    axum::serve(listener, app).await
}
