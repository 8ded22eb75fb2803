//! Service configuration, read from the environment once at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, bail};

pub const BIND_ADDR_ENV: &str = "FORESIGHT_BIND_ADDR";
pub const MODEL_DIR_ENV: &str = "FORESIGHT_MODEL_DIR";
pub const ALLOWED_HOSTS_ENV: &str = "FORESIGHT_ALLOWED_HOSTS";
pub const PARALLEL_INFERENCE_ENV: &str = "FORESIGHT_PARALLEL_INFERENCE";

pub const DEFAULT_MODEL_DIR: &str = "models";

/// Salary regression artifact file name inside the model directory.
pub const SALARY_MODEL_FILE: &str = "salary_predictor_model.json";
/// Job classification artifact file name inside the model directory.
pub const JOB_MODEL_FILE: &str = "job_classifier_model.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub model_dir: PathBuf,
    /// Normalized host names; empty means every host is accepted.
    pub allowed_hosts: Vec<String>,
    pub parallel_inference: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            model_dir: PathBuf::from(DEFAULT_MODEL_DIR),
            allowed_hosts: Vec::new(),
            parallel_inference: true,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let bind_addr = match lookup(BIND_ADDR_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<SocketAddr>()
                .with_context(|| format!("{BIND_ADDR_ENV}={raw:?} is not a socket address"))?,
            None => defaults.bind_addr,
        };

        let model_dir = lookup(MODEL_DIR_ENV)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.model_dir);

        let allowed_hosts: Vec<String> = lookup(ALLOWED_HOSTS_ENV)
            .map(|raw| raw.split(',').filter_map(normalize_host).collect())
            .unwrap_or_default();

        let parallel_inference = match lookup(PARALLEL_INFERENCE_ENV) {
            Some(raw) => parse_bool(&raw).with_context(|| format!("invalid {PARALLEL_INFERENCE_ENV}"))?,
            None => defaults.parallel_inference,
        };

        Ok(Self {
            bind_addr,
            model_dir,
            allowed_hosts,
            parallel_inference,
        })
    }

    pub fn salary_model_path(&self) -> PathBuf {
        self.model_dir.join(SALARY_MODEL_FILE)
    }

    pub fn job_model_path(&self) -> PathBuf {
        self.model_dir.join(JOB_MODEL_FILE)
    }
}

/// Reduce an allowlist entry or `Host` header to a bare lowercase host name.
///
/// Accepts `https://example.com`, `example.com:443`, `[::1]:5000`, `example.com/path`.
pub fn normalize_host(entry: &str) -> Option<String> {
    let entry = entry.trim();
    let entry = entry.split_once("://").map_or(entry, |(_, rest)| rest);
    let authority = entry.split('/').next().unwrap_or_default();

    let host = if let Some(v6) = authority.strip_prefix('[') {
        v6.split(']').next().unwrap_or_default()
    } else {
        authority.split(':').next().unwrap_or_default()
    };

    let host = host.trim().to_ascii_lowercase();
    if host.is_empty() { None } else { Some(host) }
}

fn parse_bool(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got {other:?}"),
    }
}
