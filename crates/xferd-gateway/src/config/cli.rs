//! Command-line flags (clap derive). Environment fallbacks are wired here
//! too so that CLI > env ordering is handled by clap.

use std::path::PathBuf;

use clap::Parser;

pub const TOKEN_ENV: &str = "HAKIM_XFER_TOKEN";
pub const MAX_BYTES_ENV: &str = "HAKIM_XFER_MAX_BYTES";

/// Serve allowlisted local files to an authenticated caller over loopback HTTP.
#[derive(Debug, Default, Parser)]
#[command(name = "hakim-xferd", version, about)]
pub struct Cli {
    /// Optional YAML config file; CLI flags and env vars override it.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Bind host.
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port (required here or in the config file).
    #[arg(long)]
    pub port: Option<u16>,

    /// Bearer token; auth is disabled when unset or blank.
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// Allowed root directory (repeatable). Defaults to ~/Downloads and ~/Desktop.
    #[arg(long = "allow-root", value_name = "DIR")]
    pub allow_roots: Vec<PathBuf>,

    /// Allowed file extension (repeatable). Defaults to .png,.jpg,.jpeg,.webp,.gif.
    /// Pass an empty value to allow files without an extension.
    #[arg(long = "allow-ext", value_name = "EXT")]
    pub allow_exts: Vec<String>,

    /// Maximum file size in bytes; zero or negative means unlimited.
    #[arg(long, env = MAX_BYTES_ENV, allow_negative_numbers = true)]
    pub max_bytes: Option<i64>,
}
