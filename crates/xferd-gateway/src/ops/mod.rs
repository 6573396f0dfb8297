//! Operational HTTP endpoints.
//!
//! - `/health` : liveness plus the effective policy (no auth, no secret)
//! - fallback  : 404 `{"error":"not_found"}`

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use xferd_core::{error::ClientCode, protocol::{ErrorBody, HealthReport}};

use crate::app_state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let policy = state.policy();
    Json(HealthReport {
        ok: true,
        allow_roots: policy
            .allowed_roots()
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
        allow_exts: policy.allowed_extensions().iter().cloned().collect(),
        max_bytes: policy.max_bytes(),
    })
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new(ClientCode::NotFound.as_str())),
    )
}
