//! Startup configuration.
//!
//! Sources, highest precedence first: CLI flags, environment variables
//! (via clap), the optional YAML file, built-in defaults. The result is a
//! `ServerConfig` holding the bind address and one resolved `PolicyConfig`.

pub mod cli;
pub mod schema;

use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use thiserror::Error;
use xferd_core::PolicyConfig;

pub use cli::Cli;
pub use schema::{FileConfig, PolicySection, ServerSection};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_MAX_BYTES: i64 = 15 * 1024 * 1024;
pub const DEFAULT_ROOTS: [&str; 2] = ["~/Downloads", "~/Desktop"];
pub const DEFAULT_EXTS: [&str; 5] = [".png", ".jpg", ".jpeg", ".webp", ".gif"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path} failed: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid yaml: {0}")]
    InvalidYaml(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("port is required (--port or server.port)")]
    MissingPort,
}

/// Fully resolved startup configuration.
#[derive(Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub policy: PolicyConfig,
}

impl ServerConfig {
    /// `localhost` or a loopback IP literal.
    pub fn is_loopback(&self) -> bool {
        self.host.eq_ignore_ascii_case("localhost")
            || self
                .host
                .parse::<IpAddr>()
                .map(|ip| ip.is_loopback())
                .unwrap_or(false)
    }
}

pub fn load_from_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<FileConfig, ConfigError> {
    let cfg: FileConfig =
        serde_yaml::from_str(s).map_err(|e| ConfigError::InvalidYaml(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load the optional file named by `--config`, then merge.
pub fn resolve(cli: &Cli) -> Result<ServerConfig, ConfigError> {
    let file = cli.config.as_deref().map(load_from_file).transpose()?;
    resolve_with(cli, file)
}

/// Merge CLI/env values over an already-loaded file config.
pub fn resolve_with(cli: &Cli, file: Option<FileConfig>) -> Result<ServerConfig, ConfigError> {
    let (server, policy) = match file {
        Some(f) => (f.server, f.policy),
        None => (ServerSection::default(), PolicySection::default()),
    };

    let host = cli
        .host
        .clone()
        .or(server.host)
        .unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = cli.port.or(server.port).ok_or(ConfigError::MissingPort)?;

    // A blank CLI/env token counts as unset so it cannot mask the file's.
    let token = cli
        .token
        .clone()
        .filter(|t| !t.trim().is_empty())
        .or(policy.token);

    let roots: Vec<PathBuf> = if !cli.allow_roots.is_empty() {
        cli.allow_roots.clone()
    } else if !policy.allow_roots.is_empty() {
        policy.allow_roots
    } else {
        DEFAULT_ROOTS.into_iter().map(PathBuf::from).collect()
    };

    let exts: Vec<String> = if !cli.allow_exts.is_empty() {
        cli.allow_exts.clone()
    } else if !policy.allow_exts.is_empty() {
        policy.allow_exts
    } else {
        DEFAULT_EXTS.into_iter().map(String::from).collect()
    };

    let max_bytes = cli
        .max_bytes
        .or(policy.max_bytes)
        .unwrap_or(DEFAULT_MAX_BYTES);
    // Non-positive means unlimited.
    let max_bytes = u64::try_from(max_bytes).ok().filter(|n| *n > 0);

    Ok(ServerConfig {
        host,
        port,
        policy: PolicyConfig::new(token, &roots, &exts, max_bytes),
    })
}
