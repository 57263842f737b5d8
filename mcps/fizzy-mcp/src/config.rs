//! Connection configuration for fizzy-mcp
//!
//! Settings are resolved once at startup, in increasing priority:
//! 1. TOML file given by `--config` or `FIZZY_CONFIG_PATH` (optional)
//! 2. Environment variables `FIZZY_BASE_URL`, `FIZZY_ACCOUNT_ID`,
//!    `FIZZY_ACCESS_TOKEN`
//!
//! All three settings are required. An empty value counts as unset.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const BASE_URL_VAR: &str = "FIZZY_BASE_URL";
pub const ACCOUNT_ID_VAR: &str = "FIZZY_ACCOUNT_ID";
pub const ACCESS_TOKEN_VAR: &str = "FIZZY_ACCESS_TOKEN";

/// Errors raised while assembling the connection configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required setting is absent from both the file and the environment
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Optional on-disk settings; every key may be overridden by the environment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
}

impl FileConfig {
    /// Read `path`, or fall back to an empty config when it does not exist
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("Config file {} not found, using environment only", path.display());
            return Ok(Self::default());
        }

        tracing::info!("Loading config from: {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Immutable connection settings owned by the transport client
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend address with any trailing `/` removed
    pub base_url: String,
    pub account_id: String,
    pub access_token: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("account_id", &self.account_id)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

impl Config {
    pub fn new(
        base_url: impl Into<String>,
        account_id: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            account_id: account_id.into(),
            access_token: access_token.into(),
        }
    }

    /// Load from the optional file at `path`, then the process environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => FileConfig::read(path)?,
            None => FileConfig::default(),
        };
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Merge `file` with values looked up through `env`
    pub fn resolve(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let pick = |var: &'static str, fallback: Option<String>| {
            env(var)
                .filter(|v| !v.is_empty())
                .or(fallback.filter(|v| !v.is_empty()))
                .ok_or(ConfigError::Missing(var))
        };

        let base_url = pick(BASE_URL_VAR, file.base_url)?;
        let account_id = pick(ACCOUNT_ID_VAR, file.account_id)?;
        let access_token = pick(ACCESS_TOKEN_VAR, file.access_token)?;

        Ok(Self::new(base_url, account_id, access_token))
    }
}
