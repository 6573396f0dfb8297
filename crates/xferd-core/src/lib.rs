//! xferd core: the read-request validation pipeline.
//!
//! This crate decides whether a caller may receive the bytes of a file:
//! bearer-token authentication, path canonicalization and containment,
//! extension allowlisting, and the size limit. It carries no transport or
//! runtime dependencies; the gateway crate owns HTTP, config sources and
//! envelope encoding.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every failing check surfaces as a `Rejection`/`XferError` value.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod auth;
pub mod error;
pub mod policy;
pub mod protocol;
pub mod validate;

/// Shared result type.
pub use error::{Result, XferError};
pub use policy::PolicyConfig;
pub use validate::{read_approved, validate, Approved, ValidationOutcome};
