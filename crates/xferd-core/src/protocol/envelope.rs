//! Response bodies.

use serde::{Deserialize, Serialize};

/// Successful read response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEnvelope {
    /// Final component of the canonical path.
    pub filename: String,
    /// MIME type inferred from the extension.
    pub mime: String,
    /// Number of bytes actually read.
    pub bytes: u64,
    /// Standard padded base64 of the file contents.
    pub data_base64: String,
}

/// Error response: `{"error": code, ...extra}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bytes: Option<u64>,
}

impl ErrorBody {
    pub fn new(code: &str) -> Self {
        Self {
            error: code.to_string(),
            ext: None,
            bytes: None,
            max_bytes: None,
        }
    }
}

/// `GET /health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub ok: bool,
    pub allow_roots: Vec<String>,
    /// Sorted.
    pub allow_exts: Vec<String>,
    /// `null` when unlimited.
    pub max_bytes: Option<u64>,
}
