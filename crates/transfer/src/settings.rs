//! Client configuration

use crate::error::{Result, TransferError};
use common::constants::DEFAULT_DOWNLOAD_FILE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Base URL of the files API
pub const ENV_URL: &str = "FILE_API_URL";

/// Default download target
pub const ENV_DOWNLOAD_PATH: &str = "FILE_API_DOWNLOAD_PATH";

/// Whole-request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "FILE_API_TIMEOUT_SECS";

/// Settings for a [`TransferClient`](crate::TransferClient)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Base URL of the files API, e.g. `http://localhost:5000`
    pub url: String,
    /// Where `download` writes when no target is given
    #[serde(default = "default_download_path")]
    pub download_path: PathBuf,
    /// Request timeout applied when the client builds its own transport
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_download_path() -> PathBuf {
    PathBuf::from(DEFAULT_DOWNLOAD_FILE)
}

impl ClientSettings {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            download_path: default_download_path(),
            timeout_secs: None,
        }
    }

    pub fn with_download_path(mut self, download_path: impl Into<PathBuf>) -> Self {
        self.download_path = download_path.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Load settings from `FILE_API_URL`, `FILE_API_DOWNLOAD_PATH` and `FILE_API_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let url = non_blank(ENV_URL)
            .ok_or_else(|| TransferError::Config(format!("{} is not set", ENV_URL)))?;

        let mut settings = Self::new(url.trim());

        if let Some(download_path) = non_blank(ENV_DOWNLOAD_PATH) {
            settings.download_path = PathBuf::from(download_path);
        }

        if let Some(timeout) = non_blank(ENV_TIMEOUT_SECS) {
            let timeout_secs = timeout.trim().parse().map_err(|_| {
                TransferError::Config(format!(
                    "Invalid {}: {} (expected whole seconds)",
                    ENV_TIMEOUT_SECS, timeout
                ))
            })?;
            settings.timeout_secs = Some(timeout_secs);
        }

        Ok(settings)
    }

    /// Load settings from a JSON file: `{"url": ..., "download_path": ..., "timeout_secs": ...}`
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TransferError::Config(format!("Failed to read {:?}: {}", path, e)))?;
        Self::from_json_str(&content)
            .map_err(|e| TransferError::Config(format!("{:?}: {}", path, e)))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| TransferError::Config(format!("Failed to parse settings: {}", e)))
    }
}
