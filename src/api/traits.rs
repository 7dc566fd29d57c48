use crate::api::models::{DirectDownload, VideoMetadata};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The remote service that lists formats and resolves direct links
///
/// This isolates the controller from how the backend is reached, so tests
/// can script responses and their ordering.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Lists the formats available for a video page
    async fn get_formats(&self, url: &str) -> Result<VideoMetadata>;

    /// Resolves the direct download link of one format of a video page
    async fn get_direct_url(&self, url: &str, format_id: &str) -> Result<DirectDownload>;

    /// Best-effort liveness probe
    async fn health(&self) -> Result<()>;
}
