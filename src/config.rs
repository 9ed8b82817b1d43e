//! Client configuration, read from the environment (and `.env` when present).

use std::{path::PathBuf, time::Duration};

use thiserror::Error;
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_REGISTER_PATH: &str = "/api/v1/auth/register";
pub const DEFAULT_UPLOAD_IMAGE_PATH: &str = "/api/v1/auth/upload-image";
pub const DEFAULT_SESSION_FILE: &str = ".expense-session.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Endpoint paths on the api server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPaths {
    pub register: String,
    pub upload_image: String,
}

impl Default for ApiPaths {
    fn default() -> Self {
        Self {
            register: DEFAULT_REGISTER_PATH.to_string(),
            upload_image: DEFAULT_UPLOAD_IMAGE_PATH.to_string(),
        }
    }
}

impl ApiPaths {
    /// Resolve paths through `lookup`. A path that is not configured falls
    /// back to its default, and the fallback is logged.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            register: path_or_default(&lookup, "EXPENSE_REGISTER_PATH", DEFAULT_REGISTER_PATH),
            upload_image: path_or_default(
                &lookup,
                "EXPENSE_UPLOAD_IMAGE_PATH",
                DEFAULT_UPLOAD_IMAGE_PATH,
            ),
        }
    }
}

fn path_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    match lookup(key).filter(|value| !value.trim().is_empty()) {
        Some(path) => path,
        None => {
            warn!(key, default, "endpoint path not configured, using default");
            default.to_string()
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub paths: ApiPaths,
    pub session_file: PathBuf,
    /// No timeout when `None`
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            paths: ApiPaths::default(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Read the process environment. `dotenvy::var` falls back to `.env`
    /// on its own, so callers only load it explicitly when something else
    /// (clap `env` args) needs it first.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|key| dotenvy::var(key).ok())
    }

    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup("EXPENSE_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                key: "EXPENSE_API_URL",
                reason: format!("expected an http(s) url, got {:?}", base_url),
            });
        }

        let timeout = lookup("EXPENSE_TIMEOUT_SECS")
            .map(|secs| {
                secs.parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|e| ConfigError::Invalid {
                        key: "EXPENSE_TIMEOUT_SECS",
                        reason: e.to_string(),
                    })
            })
            .transpose()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            paths: ApiPaths::resolve(&lookup),
            session_file: lookup("EXPENSE_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE)),
            timeout,
        })
    }
}
