//! Toolkit configuration: retry cadence, cache layout, source credentials.
//!
//! Everything is loaded from an explicit TOML path and handed to whoever
//! needs it. Credentials in particular are always injected this way and
//! never read from the process environment, so a job's inputs are visible
//! in one place.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::retry::{InvalidPolicy, RetryPolicy};

/// Retry parameters (optional `[retry]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrySettings {
    /// Attempts per collection, including the first.
    pub max_attempts: u32,
    /// Fixed pause between attempts, in seconds.
    pub delay_secs: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay_secs: 300,
        }
    }
}

impl RetrySettings {
    pub fn to_policy(&self) -> Result<RetryPolicy, InvalidPolicy> {
        RetryPolicy::new(self.max_attempts, Duration::from_secs(self.delay_secs))
    }
}

/// Cache layout (optional `[cache]` section).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Directory relative artifact keys are resolved against.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

/// Connection coordinates for one named source. Handed verbatim to
/// whatever vendor client the caller constructs; nothing here is
/// interpreted by dcm itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceCreds {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    #[serde(default)]
    pub database: Option<String>,
    /// Driver-specific extras (send/receive timeouts, read preference...),
    /// passed through untouched.
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DcmConfig {
    /// Optional retry cadence; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetrySettings>,
    #[serde(default)]
    pub cache: CacheSettings,
    /// Credential bundles keyed by source name (`[sources.warehouse]`...).
    #[serde(default)]
    pub sources: BTreeMap<String, SourceCreds>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("parse token {path}: {source}")]
    Token {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("config dir: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
    #[error(transparent)]
    InvalidRetry(#[from] InvalidPolicy),
}

impl DcmConfig {
    /// Load from an explicit path. An invalid `[retry]` section fails
    /// here, not at first use.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: DcmConfig = toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(retry) = &cfg.retry {
            retry.to_policy()?;
        }
        Ok(cfg)
    }

    /// Retry policy from the `[retry]` section, or the library default.
    pub fn retry_policy(&self) -> Result<RetryPolicy, InvalidPolicy> {
        match &self.retry {
            Some(settings) => settings.to_policy(),
            None => Ok(RetryPolicy::default()),
        }
    }

    /// Resolve an artifact key against the configured cache root. Absolute
    /// keys, and any key when no root is set, are used as-is.
    pub fn cache_key(&self, key: &Path) -> PathBuf {
        match &self.cache.root {
            Some(root) if key.is_relative() => root.join(key),
            _ => key.to_path_buf(),
        }
    }
}

/// Default config path under the XDG config home.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dcm")?;
    xdg_dirs
        .place_config_file("config.toml")
        .map_err(|source| ConfigError::Write {
            path: PathBuf::from("config.toml"),
            source,
        })
}

/// Load the default config, writing one with defaults on first run.
pub fn load_or_init() -> Result<DcmConfig, ConfigError> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DcmConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, toml).map_err(|source| ConfigError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    DcmConfig::load(&path)
}

/// Load an opaque service-account token for a caller's vendor SDK. The
/// blob is checked to be JSON and nothing more.
pub fn load_service_token(path: &Path) -> Result<serde_json::Value, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| ConfigError::Token {
        path: path.to_path_buf(),
        source,
    })
}
