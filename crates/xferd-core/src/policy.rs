//! Immutable access policy.
//!
//! Construct once at startup, then share via `Arc`. Roots are canonicalized
//! here and never re-resolved per request.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::validate::expand_home;

/// Resolved policy consumed by the auth gate and the path validator.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    auth_secret: Option<String>,
    allowed_roots: Vec<PathBuf>,
    allowed_extensions: BTreeSet<String>,
    max_bytes: Option<u64>,
}

impl PolicyConfig {
    /// Build a policy from unresolved inputs.
    ///
    /// - `auth_secret` is trimmed; a blank secret disables auth.
    /// - each root is `~`-expanded and canonicalized; roots that cannot be
    ///   resolved are skipped with a warning (they cannot contain anything).
    /// - each extension goes through [`normalize_ext`]. A blank entry becomes
    ///   `""`, which explicitly allows files without an extension.
    pub fn new<S: AsRef<str>>(
        auth_secret: Option<String>,
        roots: &[PathBuf],
        extensions: &[S],
        max_bytes: Option<u64>,
    ) -> Self {
        let auth_secret = auth_secret
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let mut allowed_roots: Vec<PathBuf> = Vec::with_capacity(roots.len());
        for root in roots {
            match resolve_root(root) {
                Ok(canonical) => {
                    if !allowed_roots.contains(&canonical) {
                        allowed_roots.push(canonical);
                    }
                }
                Err(e) => {
                    tracing::warn!(root = %root.display(), error = %e, "skipping unresolvable allow root");
                }
            }
        }

        let allowed_extensions = extensions
            .iter()
            .map(|e| normalize_ext(e.as_ref()))
            .collect();

        Self {
            auth_secret,
            allowed_roots,
            allowed_extensions,
            max_bytes,
        }
    }

    pub fn auth_secret(&self) -> Option<&str> {
        self.auth_secret.as_deref()
    }

    pub fn allowed_roots(&self) -> &[PathBuf] {
        &self.allowed_roots
    }

    /// Sorted (BTreeSet order).
    pub fn allowed_extensions(&self) -> &BTreeSet<String> {
        &self.allowed_extensions
    }

    pub fn max_bytes(&self) -> Option<u64> {
        self.max_bytes
    }

    pub fn is_extension_allowed(&self, ext: &str) -> bool {
        self.allowed_extensions.contains(ext)
    }

    /// Component-wise containment: `path` equals a root or has one as an
    /// ancestor. `/home/alice-other` is not under `/home/alice`.
    pub fn is_contained(&self, canonical: &Path) -> bool {
        self.allowed_roots
            .iter()
            .any(|root| canonical.starts_with(root))
    }
}

fn resolve_root(root: &Path) -> std::io::Result<PathBuf> {
    let expanded = match root.to_str() {
        Some(s) => expand_home(s)?,
        None => root.to_path_buf(),
    };
    std::fs::canonicalize(expanded)
}

/// Normalize an extension for allowlist comparison: trim, lowercase, and
/// prefix with `.`. Blank input stays `""`.
pub fn normalize_ext(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.is_empty() {
        return ext;
    }
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}
