//! Client configuration

use crate::utils::error::{FormatGrabError, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Environment variable naming the backend, read at build time and at runtime
pub const BACKEND_ENV: &str = "FORMATGRAB_BACKEND_URL";

const FALLBACK_BACKEND: &str = "http://127.0.0.1:8000";

/// Client settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientSettings {
    /// Base URL of the format backend, fully qualified, no trailing slash
    pub backend_url: String,

    /// How long the "download started" notice stays visible (seconds)
    pub notice_seconds: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            backend_url: option_env!("FORMATGRAB_BACKEND_URL")
                .unwrap_or(FALLBACK_BACKEND)
                .to_string(),
            notice_seconds: 4,
        }
    }
}

impl ClientSettings {
    /// Settings with a specific backend, normalized
    pub fn with_backend(backend_url: &str) -> Result<Self> {
        Ok(Self {
            backend_url: normalize_backend_url(backend_url)?,
            ..Self::default()
        })
    }

    /// Resolve settings from, in order: explicit override, environment,
    /// settings file, build-time default.
    pub fn resolve(override_url: Option<&str>) -> Result<Self> {
        let mut settings = match settings_path() {
            Some(path) if path.exists() => Self::load(&path)?,
            _ => Self::default(),
        };

        if let Some(url) = override_url {
            settings.backend_url = url.to_string();
        } else if let Ok(url) = std::env::var(BACKEND_ENV) {
            debug!("Backend taken from {}", BACKEND_ENV);
            settings.backend_url = url;
        }

        settings.backend_url = normalize_backend_url(&settings.backend_url)?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut settings: ClientSettings = serde_json::from_str(&content)
            .map_err(|e| FormatGrabError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        settings.backend_url = normalize_backend_url(&settings.backend_url)?;
        Ok(settings)
    }

    /// Save settings as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_secs(self.notice_seconds)
    }
}

/// Default location of the settings file
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("formatgrab").join("settings.json"))
}

/// Turn a configured backend value into one fully qualified base URL.
///
/// A bare host gets `https://`; trailing slashes are dropped.
pub fn normalize_backend_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(FormatGrabError::InvalidConfig(
            "backend URL is empty".to_string(),
        ));
    }

    let qualified = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        warn!("Backend URL '{}' has no scheme, assuming https", trimmed);
        format!("https://{}", trimmed)
    };

    let parsed = Url::parse(&qualified)
        .map_err(|e| FormatGrabError::InvalidConfig(format!("{}: {}", qualified, e)))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(FormatGrabError::InvalidConfig(format!(
                "unsupported scheme '{}' in backend URL",
                other
            )))
        }
    }
    if parsed.host_str().is_none() {
        return Err(FormatGrabError::InvalidConfig(format!(
            "backend URL '{}' has no host",
            qualified
        )));
    }

    Ok(qualified)
}
