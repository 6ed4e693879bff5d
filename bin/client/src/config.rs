//! Client configuration resolution

use anyhow::{Context, Result};
use std::path::Path;
use transfer::ClientSettings;

/// Resolve settings with priority: --url > --config file > environment
pub fn resolve_settings(url: Option<&str>, config_file: Option<&Path>) -> Result<ClientSettings> {
    let mut settings = match (config_file, url) {
        (Some(path), _) => ClientSettings::from_json_file(path)
            .with_context(|| format!("Failed to load settings from {:?}", path))?,
        (None, Some(url)) => ClientSettings::new(url),
        (None, None) => ClientSettings::from_env()
            .context("No files API URL configured. Pass --url, --config or set FILE_API_URL")?,
    };

    if let Some(url) = url {
        settings.url = url.to_string();
    }

    Ok(settings)
}
