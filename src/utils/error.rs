//! Error handling for formatgrab

use thiserror::Error;

/// Message shown for every failure to complete the HTTP exchange itself.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// Main error type for formatgrab
#[derive(Debug, Error)]
pub enum FormatGrabError {
    /// The backend understood the request but reported a failure in its `error` field
    #[error("{0}")]
    Backend(String),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned HTTP status {0}")]
    Status(u16),

    #[error("Malformed backend response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to start download: {0}")]
    Launch(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FormatGrabError {
    /// True when the HTTP exchange could not be completed as expected
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            FormatGrabError::Transport(_) | FormatGrabError::Status(_) | FormatGrabError::Decode(_)
        )
    }

    /// Text for the error panel. Transport details never reach the user.
    pub fn user_message(&self) -> String {
        match self {
            FormatGrabError::Backend(message) => message.clone(),
            e if e.is_transport() => NETWORK_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FormatGrabError>;
