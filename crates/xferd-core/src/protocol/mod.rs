//! JSON wire contracts for the read API.
//!
//! - `request`: the `POST /v1/read` body (`{"path": ...}`).
//! - `envelope`: success, error, and health bodies.
//!
//! Request parsing is panic-free: malformed bodies surface as `XferError`
//! so hostile input never brings the daemon down.

pub mod envelope;
pub mod request;

pub use envelope::{ErrorBody, FileEnvelope, HealthReport};
pub use request::parse_read_request;
