//! HTTP transport for the read API.
//!
//! - `read`: `POST /v1/read` handler (auth -> parse -> validate -> read)
//! - `response`: JSON error responses built from `XferError`

pub mod read;
pub mod response;
