//! Utility modules for error handling, configuration and display formatting

pub mod config;
pub mod error;
pub mod format;

// Re-export for convenience
pub use config::ClientSettings;
pub use error::{FormatGrabError, NETWORK_ERROR_MESSAGE};
pub use format::{escape_html, format_file_size, format_number};
