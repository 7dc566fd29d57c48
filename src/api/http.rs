//! reqwest client for the format backend
//!
//! Every call is a single exchange: no retries, no client-side deadline.

use crate::api::models::{
    decode_reply, DirectDownload, DirectUrlRequest, FormatsRequest, VideoMetadata,
};
use crate::api::traits::Backend;
use crate::utils::config::ClientSettings;
use crate::utils::error::{FormatGrabError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};

/// Backend reached over HTTP with JSON bodies
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("formatgrab/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.backend_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body and decode the reply envelope.
    ///
    /// Non-2xx is a transport failure no matter what the body says.
    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let endpoint = self.endpoint(path);
        debug!("POST {}", endpoint);

        let response = self
            .client
            .post(&endpoint)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!("Request to {} failed: {}", endpoint, e);
                FormatGrabError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("{} answered with HTTP {}", endpoint, status.as_u16());
            return Err(FormatGrabError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        decode_reply(&bytes).map_err(|e| {
            match &e {
                FormatGrabError::Backend(message) => warn!("{} reported: {}", endpoint, message),
                _ => error!("Undecodable reply from {}: {}", endpoint, e),
            }
            e
        })
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn get_formats(&self, url: &str) -> Result<VideoMetadata> {
        self.post("/get_formats", &FormatsRequest { url }).await
    }

    async fn get_direct_url(&self, url: &str, format_id: &str) -> Result<DirectDownload> {
        self.post("/get_direct_url", &DirectUrlRequest { url, format_id })
            .await
    }

    async fn health(&self) -> Result<()> {
        let response = self.client.get(self.endpoint("/health")).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(FormatGrabError::Status(response.status().as_u16()))
        }
    }
}
