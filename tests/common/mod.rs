//! Scripted backend and recording launcher shared by the integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use formatgrab::utils::error::{FormatGrabError, Result};
use formatgrab::{Backend, DirectDownload, DownloadLauncher, FormatDescriptor, VideoMetadata};
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::{oneshot, watch};

pub const VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
pub const OTHER_URL: &str = "https://vimeo.com/76979871";

/// A reply handed out immediately or once the test releases it
pub enum Scripted<T> {
    Ready(Result<T>),
    Wait(oneshot::Receiver<Result<T>>),
}

impl<T> Scripted<T> {
    async fn resolve(self) -> Result<T> {
        match self {
            Scripted::Ready(result) => result,
            Scripted::Wait(rx) => rx.await.unwrap_or(Err(FormatGrabError::Status(599))),
        }
    }
}

pub struct ScriptedBackend {
    formats: Mutex<VecDeque<Scripted<VideoMetadata>>>,
    direct: Mutex<VecDeque<Scripted<DirectDownload>>>,
    healthy: bool,
    calls: Mutex<Vec<(String, Option<String>)>>,
    started: watch::Sender<usize>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::with_health(true)
    }

    pub fn with_health(healthy: bool) -> Self {
        let (started, _) = watch::channel(0);
        Self {
            formats: Mutex::new(VecDeque::new()),
            direct: Mutex::new(VecDeque::new()),
            healthy,
            calls: Mutex::new(Vec::new()),
            started,
        }
    }

    pub fn push_formats(&self, reply: Result<VideoMetadata>) {
        self.formats
            .lock()
            .unwrap()
            .push_back(Scripted::Ready(reply));
    }

    pub fn hold_formats(&self) -> oneshot::Sender<Result<VideoMetadata>> {
        let (tx, rx) = oneshot::channel();
        self.formats.lock().unwrap().push_back(Scripted::Wait(rx));
        tx
    }

    pub fn push_direct(&self, reply: Result<DirectDownload>) {
        self.direct.lock().unwrap().push_back(Scripted::Ready(reply));
    }

    pub fn hold_direct(&self) -> oneshot::Sender<Result<DirectDownload>> {
        let (tx, rx) = oneshot::channel();
        self.direct.lock().unwrap().push_back(Scripted::Wait(rx));
        tx
    }

    /// (url, format_id) of every request, in call order
    pub fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }

    /// Wait until `n` requests have reached the backend
    pub async fn wait_for_calls(&self, n: usize) {
        let mut rx = self.started.subscribe();
        rx.wait_for(|count| *count >= n).await.expect("backend dropped");
    }

    fn record(&self, url: &str, format_id: Option<&str>) {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), format_id.map(str::to_string)));
        self.started.send_modify(|count| *count += 1);
    }
}

#[async_trait]
impl Backend for ScriptedBackend {
    async fn get_formats(&self, url: &str) -> Result<VideoMetadata> {
        self.record(url, None);
        let next = self.formats.lock().unwrap().pop_front();
        match next {
            Some(reply) => reply.resolve().await,
            None => Err(FormatGrabError::Status(500)),
        }
    }

    async fn get_direct_url(&self, url: &str, format_id: &str) -> Result<DirectDownload> {
        self.record(url, Some(format_id));
        let next = self.direct.lock().unwrap().pop_front();
        match next {
            Some(reply) => reply.resolve().await,
            None => Err(FormatGrabError::Status(500)),
        }
    }

    async fn health(&self) -> Result<()> {
        if self.healthy {
            Ok(())
        } else {
            Err(FormatGrabError::Status(503))
        }
    }
}

#[derive(Default)]
pub struct RecordingLauncher {
    pub launched: Mutex<Vec<DirectDownload>>,
    pub fail: bool,
}

impl RecordingLauncher {
    pub fn failing() -> Self {
        Self {
            launched: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn launched(&self) -> Vec<DirectDownload> {
        self.launched.lock().unwrap().clone()
    }
}

#[async_trait]
impl DownloadLauncher for RecordingLauncher {
    async fn launch(&self, download: &DirectDownload) -> Result<()> {
        if self.fail {
            return Err(FormatGrabError::Launch("no browser available".to_string()));
        }
        self.launched.lock().unwrap().push(download.clone());
        Ok(())
    }
}

pub fn sample_format(id: &str) -> FormatDescriptor {
    FormatDescriptor {
        format_id: id.to_string(),
        quality: None,
        resolution: Some("1280x720".to_string()),
        ext: "mp4".to_string(),
        format_note: Some("720p".to_string()),
        filesize: Some(1_048_576),
    }
}

pub fn sample_video(title: &str, format_ids: &[&str]) -> VideoMetadata {
    VideoMetadata {
        title: title.to_string(),
        thumbnail: Some("https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg".to_string()),
        uploader: Some("Uploader".to_string()),
        duration: Some("3:33".to_string()),
        view_count: Some(1_500_000),
        formats: format_ids.iter().map(|id| sample_format(id)).collect(),
    }
}

pub fn sample_download(id: &str) -> DirectDownload {
    DirectDownload {
        video_url: format!("https://cdn.example.com/{}.mp4", id),
        filename: "video.mp4".to_string(),
    }
}
