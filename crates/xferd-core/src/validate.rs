//! Path validation pipeline.
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. blank input            -> `MissingPath`
//! 2. expand `~`, canonicalize (strict) -> `NotFound` / `BadPath`
//! 3. regular file           -> `NotAFile`
//! 4. extension allowlist    -> `ExtensionDenied`
//! 5. root containment       -> `PathDenied`
//! 6. size limit (stat only) -> `StatFailed` / `TooLarge`
//!
//! Containment runs on the canonical path, so `..` segments and symlinks
//! pointing outside a root are already resolved to their real target.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{Result, XferError};
use crate::policy::{normalize_ext, PolicyConfig};

/// Outcome of [`validate`]: approved, or exactly one rejection.
pub type ValidationOutcome = Result<Approved>;

/// A path that passed every check. Reads must use `canonical_path` as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Approved {
    pub canonical_path: PathBuf,
    pub size_bytes: u64,
}

/// Caller-supplied string plus its canonical resolution.
#[derive(Debug, Clone)]
pub struct CandidatePath {
    pub raw: String,
    pub canonical: PathBuf,
}

impl CandidatePath {
    /// Expand a leading `~` and canonicalize; the target must exist.
    pub fn resolve(raw: &str) -> Result<Self> {
        let expanded = expand_home(raw).map_err(XferError::BadPath)?;
        let canonical = fs::canonicalize(&expanded).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => XferError::NotFound,
            _ => XferError::BadPath(e),
        })?;
        Ok(Self {
            raw: raw.to_string(),
            canonical,
        })
    }

    /// Lowercased, dot-prefixed extension of the file name; `""` if none.
    pub fn extension(&self) -> String {
        file_extension(&self.canonical)
    }
}

/// Run the full check sequence for `raw` against `policy`.
pub fn validate(raw: &str, policy: &PolicyConfig) -> ValidationOutcome {
    if raw.trim().is_empty() {
        return Err(XferError::MissingPath);
    }

    let candidate = CandidatePath::resolve(raw)?;

    match fs::metadata(&candidate.canonical) {
        Ok(meta) if meta.is_file() => {}
        _ => return Err(XferError::NotAFile),
    }

    let ext = candidate.extension();
    if !policy.is_extension_allowed(&ext) {
        return Err(XferError::ExtensionDenied { ext });
    }

    if !policy.is_contained(&candidate.canonical) {
        return Err(XferError::PathDenied);
    }

    let size_bytes = fs::metadata(&candidate.canonical)
        .map_err(XferError::StatFailed)?
        .len();

    if let Some(max_bytes) = policy.max_bytes() {
        if size_bytes > max_bytes {
            return Err(XferError::TooLarge {
                bytes: size_bytes,
                max_bytes,
            });
        }
    }

    Ok(Approved {
        canonical_path: candidate.canonical,
        size_bytes,
    })
}

/// Read the bytes of an approved file.
///
/// The read is capped at `max_bytes + 1`, so a file that grew after the
/// size check is rejected instead of buffered. The reported `bytes` is the
/// size of the open file at that point, never less than what was read.
pub fn read_approved(approved: &Approved, policy: &PolicyConfig) -> Result<Vec<u8>> {
    let file = File::open(&approved.canonical_path).map_err(XferError::ReadFailed)?;
    let mut buf = Vec::with_capacity(usize::try_from(approved.size_bytes).unwrap_or(0));

    match policy.max_bytes() {
        Some(max_bytes) => {
            (&file)
                .take(max_bytes.saturating_add(1))
                .read_to_end(&mut buf)
                .map_err(XferError::ReadFailed)?;
            let read = buf.len() as u64;
            if read > max_bytes {
                let bytes = file.metadata().map(|m| m.len()).unwrap_or(read).max(read);
                return Err(XferError::TooLarge { bytes, max_bytes });
            }
        }
        None => {
            let mut file = file;
            file.read_to_end(&mut buf).map_err(XferError::ReadFailed)?;
        }
    }

    Ok(buf)
}

/// Expand `~` or a leading `~/` to the home directory. Other inputs
/// (including `~user`) are returned unchanged.
pub fn expand_home(raw: &str) -> io::Result<PathBuf> {
    let rest = if raw == "~" {
        Some("")
    } else {
        raw.strip_prefix("~/")
    };

    let Some(rest) = rest else {
        return Ok(PathBuf::from(raw));
    };

    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "home directory unavailable"))?;
    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(home.join(rest))
    }
}

fn file_extension(path: &Path) -> String {
    path.extension()
        .map(|e| normalize_ext(&e.to_string_lossy()))
        .unwrap_or_default()
}
