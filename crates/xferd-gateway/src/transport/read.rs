//! `POST /v1/read` handler.
//!
//! Order matters: the bearer token is checked before the body is looked at
//! and before any filesystem access, so unauthenticated callers learn
//! nothing about which paths exist.

use std::io;
use std::path::Path;

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;

use xferd_core::{
    auth,
    protocol::{parse_read_request, FileEnvelope},
    read_approved, validate, PolicyConfig, Result, XferError,
};

use crate::app_state::AppState;
use crate::mime::guess_mime;
use crate::transport::response::ApiError;

pub async fn read_file(
    State(app): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> std::result::Result<Json<FileEnvelope>, ApiError> {
    let header = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    if !auth::authorize(header, app.policy()) {
        return Err(XferError::Unauthorized.into());
    }

    let raw = parse_read_request(&body)?;

    // Canonicalize/stat/read are blocking syscalls; keep them off the reactor.
    let policy = app.shared_policy();
    let envelope = tokio::task::spawn_blocking(move || serve(&raw, &policy))
        .await
        .map_err(|e| XferError::ReadFailed(io::Error::new(io::ErrorKind::Other, e)))??;

    tracing::info!(
        filename = %envelope.filename,
        mime = %envelope.mime,
        bytes = envelope.bytes,
        "read served"
    );
    Ok(Json(envelope))
}

/// Validate, then read exactly the approved canonical path.
fn serve(raw: &str, policy: &PolicyConfig) -> Result<FileEnvelope> {
    let approved = validate(raw, policy)?;
    let data = read_approved(&approved, policy)?;
    Ok(encode_envelope(&approved.canonical_path, &data))
}

pub fn encode_envelope(path: &Path, data: &[u8]) -> FileEnvelope {
    FileEnvelope {
        filename: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        mime: guess_mime(path).to_string(),
        bytes: data.len() as u64,
        data_base64: STANDARD.encode(data),
    }
}
