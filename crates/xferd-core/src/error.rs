//! Shared error type across xferd crates.

use std::io;

use thiserror::Error;

use crate::protocol::ErrorBody;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Missing or incorrect bearer token.
    Unauthorized,
    /// Request body is not a JSON object.
    InvalidJson,
    /// `path` field absent or blank.
    MissingPath,
    /// Path cannot be resolved.
    BadPath,
    /// Resolved target does not exist.
    NotFound,
    /// Resolved target is not a regular file.
    NotAFile,
    /// Extension not on the allowlist.
    ExtensionDenied,
    /// Resolved path escapes every allowed root.
    PathDenied,
    /// File exceeds the configured limit.
    TooLarge,
    /// Metadata lookup failed after the path was approved.
    StatFailed,
    /// Reading the approved file failed.
    ReadFailed,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::Unauthorized => "unauthorized",
            ClientCode::InvalidJson => "invalid_json",
            ClientCode::MissingPath => "missing_path",
            ClientCode::BadPath => "bad_path",
            ClientCode::NotFound => "not_found",
            ClientCode::NotAFile => "not_a_file",
            ClientCode::ExtensionDenied => "extension_denied",
            ClientCode::PathDenied => "path_denied",
            ClientCode::TooLarge => "too_large",
            ClientCode::StatFailed => "stat_failed",
            ClientCode::ReadFailed => "read_failed",
        }
    }

    /// HTTP status the gateway answers with.
    pub fn status(self) -> u16 {
        match self {
            ClientCode::Unauthorized => 401,
            ClientCode::InvalidJson
            | ClientCode::MissingPath
            | ClientCode::BadPath
            | ClientCode::NotAFile => 400,
            ClientCode::NotFound => 404,
            ClientCode::ExtensionDenied | ClientCode::PathDenied => 403,
            ClientCode::TooLarge => 413,
            ClientCode::StatFailed | ClientCode::ReadFailed => 500,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, XferError>;

/// Unified error type for the read pipeline.
///
/// The `Display` text may carry io details and is meant for logs only;
/// clients see [`XferError::body`].
#[derive(Debug, Error)]
pub enum XferError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("invalid json: {0}")]
    InvalidJson(String),
    #[error("missing path")]
    MissingPath,
    #[error("bad path: {0}")]
    BadPath(#[source] io::Error),
    #[error("not found")]
    NotFound,
    #[error("not a regular file")]
    NotAFile,
    #[error("extension denied: {ext:?}")]
    ExtensionDenied { ext: String },
    #[error("path outside allowed roots")]
    PathDenied,
    #[error("too large: {bytes} > {max_bytes}")]
    TooLarge { bytes: u64, max_bytes: u64 },
    #[error("stat failed: {0}")]
    StatFailed(#[source] io::Error),
    #[error("read failed: {0}")]
    ReadFailed(#[source] io::Error),
}

impl XferError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            XferError::Unauthorized => ClientCode::Unauthorized,
            XferError::InvalidJson(_) => ClientCode::InvalidJson,
            XferError::MissingPath => ClientCode::MissingPath,
            XferError::BadPath(_) => ClientCode::BadPath,
            XferError::NotFound => ClientCode::NotFound,
            XferError::NotAFile => ClientCode::NotAFile,
            XferError::ExtensionDenied { .. } => ClientCode::ExtensionDenied,
            XferError::PathDenied => ClientCode::PathDenied,
            XferError::TooLarge { .. } => ClientCode::TooLarge,
            XferError::StatFailed(_) => ClientCode::StatFailed,
            XferError::ReadFailed(_) => ClientCode::ReadFailed,
        }
    }

    pub fn status(&self) -> u16 {
        self.client_code().status()
    }

    /// Client-visible error body: the code plus the diagnostic fields that
    /// are safe to disclose. Never contains paths or io error text.
    pub fn body(&self) -> ErrorBody {
        let mut body = ErrorBody::new(self.client_code().as_str());
        match self {
            XferError::ExtensionDenied { ext } => body.ext = Some(ext.clone()),
            XferError::TooLarge { bytes, max_bytes } => {
                body.bytes = Some(*bytes);
                body.max_bytes = Some(*max_bytes);
            }
            _ => {}
        }
        body
    }
}
