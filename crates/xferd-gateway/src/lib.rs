//! xferd gateway library entry.
//!
//! Wires config resolution, the shared policy state, and the HTTP surface
//! (`/health`, `/v1/read`) around `xferd-core`. It is consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod mime;
pub mod ops;
pub mod router;
pub mod transport;
