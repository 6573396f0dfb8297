//! `POST /v1/read` request body.

use serde_json::Value;

use crate::error::{Result, XferError};

/// Extract the raw `path` string from a read request body.
///
/// An empty body behaves like `{}`. Anything that is not a JSON object is
/// `InvalidJson`; a missing, non-string, or blank `path` is `MissingPath`.
/// The returned string is untouched; trimming and expansion belong to the
/// validator.
pub fn parse_read_request(body: &[u8]) -> Result<String> {
    if body.is_empty() {
        return Err(XferError::MissingPath);
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| XferError::InvalidJson(e.to_string()))?;

    let obj = value
        .as_object()
        .ok_or_else(|| XferError::InvalidJson("body must be a json object".into()))?;

    match obj.get("path").and_then(Value::as_str) {
        Some(p) if !p.trim().is_empty() => Ok(p.to_string()),
        _ => Err(XferError::MissingPath),
    }
}
