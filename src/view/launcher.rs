//! Hands resolved links to the platform's browser

use crate::api::models::DirectDownload;
use crate::utils::error::{FormatGrabError, Result};
use async_trait::async_trait;
use tracing::info;

/// Starts a download for a resolved link
///
/// Open/save semantics belong to whatever handles the link.
#[async_trait]
pub trait DownloadLauncher: Send + Sync {
    async fn launch(&self, download: &DirectDownload) -> Result<()>;
}

/// Opens the link with the system's default handler
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

#[async_trait]
impl DownloadLauncher for SystemLauncher {
    async fn launch(&self, download: &DirectDownload) -> Result<()> {
        info!(
            "Opening {} (suggested name: {})",
            download.video_url, download.filename
        );
        open::that_detached(&download.video_url)
            .map_err(|e| FormatGrabError::Launch(e.to_string()))
    }
}
