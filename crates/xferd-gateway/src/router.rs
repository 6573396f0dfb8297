//! Axum router wiring.
//!
//! Exposes `GET /health` and `POST /v1/read`. Every other method or path
//! answers 404 `{"error":"not_found"}`. axum serves `HEAD` from the `GET`
//! handler unless a `head` route is set, so `/health` routes it explicitly.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/health",
            get(ops::health)
                .head(ops::not_found)
                .fallback(ops::not_found),
        )
        .route(
            "/v1/read",
            post(transport::read::read_file).fallback(ops::not_found),
        )
        .fallback(ops::not_found)
        .with_state(state)
}
