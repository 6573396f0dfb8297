//! Error -> HTTP response mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use xferd_core::XferError;

/// Wrapper so core errors can be returned from handlers.
///
/// The body is `XferError::body()` (code plus safe extras); the full error,
/// io details included, only goes to the log.
#[derive(Debug)]
pub struct ApiError(pub XferError);

impl From<XferError> for ApiError {
    fn from(e: XferError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code().as_str();
        let status =
            StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(code, error = %self.0, "read failed");
        } else {
            tracing::warn!(code, error = %self.0, "read rejected");
        }

        (status, Json(self.0.body())).into_response()
    }
}
