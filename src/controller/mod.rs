//! Client controller: input validation, backend calls and page updates
//!
//! Each of the two requests (format listing, direct link) owns a
//! [`RequestGate`]. A response is applied only if no newer request of the
//! same kind was started meanwhile; older responses are dropped and the
//! call returns [`Completion::Superseded`].
//!
//! The page lock is never held across an await.

pub mod session;
pub mod state;

use crate::api::models::{DirectDownload, VideoQuery};
use crate::api::traits::Backend;
use crate::utils::config::ClientSettings;
use crate::utils::error::{FormatGrabError, Result};
use crate::view::components;
use crate::view::launcher::DownloadLauncher;
use crate::view::page;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

pub use session::{RequestGate, Session, Ticket};
pub use state::{lock_page, DownloadControl, Notice, PageState, Phase};

/// Shown when the URL field fails the syntactic check on submit
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid video URL";
/// Shown once a direct link was handed to the browser
pub const DOWNLOAD_STARTED_MESSAGE: &str = "Download started! Check your browser downloads.";

/// How a request ended from the page's point of view
#[derive(Debug, Clone, PartialEq)]
pub enum Completion<T> {
    /// The response was the latest and has been applied
    Applied(T),
    /// A newer request of the same kind started first; nothing was applied
    Superseded,
}

impl<T> Completion<T> {
    pub fn applied(self) -> Option<T> {
        match self {
            Completion::Applied(value) => Some(value),
            Completion::Superseded => None,
        }
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, Completion::Superseded)
    }
}

/// Mediates between user input, the backend and the page
pub struct Controller {
    backend: Arc<dyn Backend>,
    launcher: Arc<dyn DownloadLauncher>,
    settings: ClientSettings,
    page: Mutex<PageState>,
    formats_gate: RequestGate,
    download_gate: RequestGate,
}

impl Controller {
    pub fn new(
        backend: Arc<dyn Backend>,
        launcher: Arc<dyn DownloadLauncher>,
        settings: ClientSettings,
    ) -> Self {
        Self {
            backend,
            launcher,
            settings,
            page: Mutex::new(PageState::default()),
            formats_gate: RequestGate::new(),
            download_gate: RequestGate::new(),
        }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Advisory health probe. Never surfaces anything to the user.
    pub async fn init(&self) {
        match self.backend.health().await {
            Ok(()) => debug!("Backend at {} is healthy", self.settings.backend_url),
            Err(FormatGrabError::Status(code)) => {
                warn!("Backend might be unavailable (HTTP {})", code)
            }
            Err(e) => warn!("Cannot reach backend server: {}", e),
        }
    }

    /// Syntactic URL check; also enables or disables the submit control
    pub async fn validate(&self, url: &str) -> bool {
        let valid = VideoQuery::looks_valid(url);
        self.lock().submit_enabled = valid;
        valid
    }

    /// The URL field changed
    pub async fn input_changed(&self, text: &str) -> bool {
        self.lock().input = text.to_string();
        self.validate(text).await
    }

    /// Text was pasted into the URL field, replacing its content
    pub async fn pasted(&self, text: &str) -> bool {
        self.input_changed(text.trim()).await
    }

    /// Submit the URL field
    pub async fn submit(&self) -> Result<Completion<Arc<Session>>> {
        let url = self.lock().input.trim().to_string();
        self.fetch_formats(&url).await
    }

    /// List the formats of `url` and make the result the current session
    pub async fn fetch_formats(&self, url: &str) -> Result<Completion<Arc<Session>>> {
        if !self.validate(url).await {
            // A listing still in flight belongs to input the user replaced
            self.formats_gate.invalidate();
            self.show_error(INVALID_URL_MESSAGE);
            let mut page = self.lock();
            page.results_html = None;
            page.formats_phase = Phase::Error;
            return Err(FormatGrabError::InvalidUrl(url.to_string()));
        }
        let query = VideoQuery::new(url)?;

        let ticket = self.formats_gate.issue();
        {
            let mut page = self.lock();
            page.error_message = None;
            page.error_html = None;
            page.results_html = None;
            page.loading = true;
            page.formats_phase = Phase::Loading;
        }

        info!("Fetching formats for {}", query.url);
        let outcome = self.backend.get_formats(&query.url).await;

        if !self.formats_gate.is_current(ticket) {
            debug!(
                "Dropping format listing #{} for {}, a newer one was started",
                ticket.generation(),
                query.url
            );
            return Ok(Completion::Superseded);
        }

        match outcome {
            Ok(metadata) => {
                debug!(
                    "Received {} formats for '{}'",
                    metadata.formats.len(),
                    metadata.title
                );
                let session = Arc::new(Session::new(query, metadata, ticket.generation()));

                let mut page = self.lock();
                page.show_session(Arc::clone(&session));
                page.loading = false;
                page.formats_phase = Phase::Results;
                Ok(Completion::Applied(session))
            }
            Err(e) => {
                error!("Format listing failed: {}", e);
                self.show_error(&e.user_message());
                self.lock().formats_phase = Phase::Error;
                Err(e)
            }
        }
    }

    /// Resolve the direct link of the format behind `control` and start the download.
    ///
    /// The control, and its counterpart on the page while `session` is shown,
    /// display the preparing state for the duration of the call and get their
    /// previous state back on every path.
    pub async fn fetch_direct_url(
        &self,
        session: &Session,
        control: &mut DownloadControl,
    ) -> Result<Completion<DirectDownload>> {
        let format_id = control.format_id.clone();
        let _busy = control.begin_busy();
        let _shown_busy = PageState::mark_busy(&self.page, session, &format_id);

        let ticket = self.download_gate.issue();
        self.lock().download_phase = Phase::Loading;

        info!("Resolving format {} of {}", format_id, session.query().url);
        let outcome = self
            .backend
            .get_direct_url(&session.query().url, &format_id)
            .await;

        if !self.download_gate.is_current(ticket) {
            debug!(
                "Dropping direct link #{} for format {}, a newer one was started",
                ticket.generation(),
                format_id
            );
            return Ok(Completion::Superseded);
        }

        let launched = match outcome {
            Ok(download) => self
                .launcher
                .launch(&download)
                .await
                .map(|()| download),
            Err(e) => Err(e),
        };

        match launched {
            Ok(download) => {
                let mut page = self.lock();
                page.notice = Some(Notice::new(
                    DOWNLOAD_STARTED_MESSAGE,
                    self.settings.notice_duration(),
                ));
                page.download_phase = Phase::Results;
                Ok(Completion::Applied(download))
            }
            Err(e) => {
                error!("Direct link for format {} failed: {}", format_id, e);
                self.show_error(&e.user_message());
                self.lock().download_phase = Phase::Error;
                Err(e)
            }
        }
    }

    /// The "Try Again" action: back to a freshly opened client
    pub async fn reload(&self) {
        self.formats_gate.invalidate();
        self.download_gate.invalidate();
        *self.lock() = PageState::default();
        info!("Client state reset");
    }

    pub async fn current_session(&self) -> Option<Arc<Session>> {
        self.lock().session.clone()
    }

    /// Snapshot of the page model
    pub async fn page(&self) -> PageState {
        self.lock().clone()
    }

    /// The page as a standalone HTML document
    pub async fn render(&self) -> String {
        page::render_page(&self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        lock_page(&self.page)
    }

    fn show_error(&self, message: &str) {
        let mut page = self.lock();
        page.loading = false;
        page.error_message = Some(message.to_string());
        page.error_html = Some(components::error_panel(message));
    }
}
