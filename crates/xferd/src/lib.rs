//! Top-level facade crate for xferd.
//!
//! Re-exports the validation core and the gateway library so users can depend on a single crate.

pub mod core {
    pub use xferd_core::*;
}

pub mod gateway {
    pub use xferd_gateway::*;
}
