//! Shared application state.
//!
//! Holds the one immutable `PolicyConfig` built at startup. Handlers get it
//! by reference (or a cheap `Arc` clone for blocking work); nothing here is
//! mutated after construction.

use std::sync::Arc;

use xferd_core::PolicyConfig;

#[derive(Clone)]
pub struct AppState {
    policy: Arc<PolicyConfig>,
}

impl AppState {
    pub fn new(policy: PolicyConfig) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    pub fn shared_policy(&self) -> Arc<PolicyConfig> {
        Arc::clone(&self.policy)
    }
}
