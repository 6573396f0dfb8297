//! Bearer-token gate.
//!
//! Stateless; must run before any filesystem access so that resolution
//! errors never leak file existence to unauthenticated callers.

use subtle::ConstantTimeEq;

use crate::policy::PolicyConfig;

const BEARER_PREFIX: &str = "Bearer ";

/// Returns true when auth is disabled, or when `header` is
/// `"Bearer " + secret` (token part trimmed of surrounding whitespace).
pub fn authorize(header: Option<&str>, policy: &PolicyConfig) -> bool {
    let Some(secret) = policy.auth_secret() else {
        return true;
    };

    let Some(token) = header.and_then(|h| h.strip_prefix(BEARER_PREFIX)) else {
        return false;
    };

    let token = token.trim().as_bytes();
    token.len() == secret.len() && bool::from(token.ct_eq(secret.as_bytes()))
}
