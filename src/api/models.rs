//! Data structures exchanged with the format backend

use crate::utils::error::{FormatGrabError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shortest accepted URL is 11 characters
const MIN_URL_CHARS: usize = 10;

/// A user supplied video page URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoQuery {
    pub url: String,
}

impl VideoQuery {
    /// Syntactic pre-filter. The backend does the real validation.
    pub fn looks_valid(url: &str) -> bool {
        url.chars().count() > MIN_URL_CHARS && url.contains("://")
    }

    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        if !Self::looks_valid(&url) {
            return Err(FormatGrabError::InvalidUrl(url));
        }
        Ok(Self { url })
    }
}

/// One downloadable encoding of a video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatDescriptor {
    pub format_id: String,
    #[serde(default)]
    pub quality: Option<String>,
    #[serde(default)]
    pub resolution: Option<String>,
    pub ext: String,
    #[serde(default, alias = "note")]
    pub format_note: Option<String>,
    #[serde(default)]
    pub filesize: Option<u64>,
}

impl FormatDescriptor {
    /// Headline for the format row: explicit quality, else "resolution (EXT)"
    pub fn quality_label(&self) -> String {
        match &self.quality {
            Some(quality) if !quality.is_empty() => quality.clone(),
            _ => format!(
                "{} ({})",
                self.resolution.as_deref().unwrap_or("unknown"),
                self.ext.to_uppercase()
            ),
        }
    }
}

/// Everything `/get_formats` reports about one video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub formats: Vec<FormatDescriptor>,
}

impl VideoMetadata {
    pub fn get_format(&self, format_id: &str) -> Option<&FormatDescriptor> {
        self.formats.iter().find(|f| f.format_id == format_id)
    }
}

/// A resolved, browser-fetchable link for one format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectDownload {
    pub video_url: String,
    pub filename: String,
}

/// Body of `POST /get_formats`
#[derive(Debug, Serialize)]
pub struct FormatsRequest<'a> {
    pub url: &'a str,
}

/// Body of `POST /get_direct_url`
#[derive(Debug, Serialize)]
pub struct DirectUrlRequest<'a> {
    pub url: &'a str,
    pub format_id: &'a str,
}

/// Decode a 2xx body that carries either the payload or an `error` field.
///
/// An `error` that is absent, null, false or empty counts as no error.
pub fn decode_reply<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let value: Value = serde_json::from_slice(bytes)?;
    if let Some(message) = value.get("error").and_then(reported_error) {
        return Err(FormatGrabError::Backend(message));
    }
    Ok(serde_json::from_value(value)?)
}

fn reported_error(error: &Value) -> Option<String> {
    match error {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
