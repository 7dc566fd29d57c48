//! Page model: what the user currently sees

use crate::controller::session::Session;
use crate::view::page;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Label a download control shows while its direct link is resolved
pub const PREPARING_LABEL: &str = "Preparing...";
/// Label of an idle download control
pub const DOWNLOAD_LABEL: &str = "Download";

/// Lifecycle of one kind of request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Results,
    Error,
}

/// A transient success message that disappears on its own
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    shown_at: Instant,
    lifetime: Duration,
}

impl Notice {
    pub fn new(message: impl Into<String>, lifetime: Duration) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
            lifetime,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.shown_at.elapsed() < self.lifetime
    }
}

/// Everything rendered on the page
#[derive(Debug, Clone, Default)]
pub struct PageState {
    /// Raw contents of the URL field
    pub input: String,
    pub submit_enabled: bool,
    pub loading: bool,
    pub formats_phase: Phase,
    pub download_phase: Phase,
    /// Session behind the results panel
    pub session: Option<Arc<Session>>,
    /// Download controls of `session`, one per format in backend order
    pub controls: Vec<DownloadControl>,
    /// Rendered results panel, `None` when hidden
    pub results_html: Option<String>,
    /// Unescaped message behind the error panel
    pub error_message: Option<String>,
    /// Rendered error panel, `None` when hidden
    pub error_html: Option<String>,
    pub notice: Option<Notice>,
}

impl PageState {
    pub fn results_visible(&self) -> bool {
        self.results_html.is_some()
    }

    pub fn error_visible(&self) -> bool {
        self.error_html.is_some()
    }

    pub fn visible_notice(&self) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| n.is_visible())
    }

    /// Make `session` current with idle controls and show its results
    pub fn show_session(&mut self, session: Arc<Session>) {
        self.controls = session.controls();
        self.session = Some(session);
        self.results_html = None;
        self.show_results();
    }

    /// Render the results panel from the current session and controls
    pub fn show_results(&mut self) {
        self.results_html = self
            .session
            .as_ref()
            .map(|session| page::results_panel(session, &self.controls));
    }

    /// Re-render the results panel if it is on screen
    fn refresh_results(&mut self) {
        if self.results_visible() {
            self.show_results();
        }
    }

    /// Put the page's control for `format_id` of `session` into the preparing
    /// state. Nothing is marked when `session` is no longer on the page.
    pub fn mark_busy<'a>(
        page: &'a Mutex<PageState>,
        session: &Session,
        format_id: &str,
    ) -> Option<PageBusyGuard<'a>> {
        let mut state = lock_page(page);
        let current = state.session.as_ref().map(|s| s.generation());
        if current != Some(session.generation()) {
            return None;
        }

        let index = state
            .controls
            .iter()
            .position(|c| c.format_id == format_id)?;
        let saved = state.controls[index].mark_preparing();
        state.refresh_results();

        Some(PageBusyGuard {
            page,
            generation: session.generation(),
            index,
            saved: Some(saved),
        })
    }
}

/// Lock the page, recovering the state if a holder panicked
pub fn lock_page(page: &Mutex<PageState>) -> MutexGuard<'_, PageState> {
    page.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The per-format button that triggers a direct download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadControl {
    pub format_id: String,
    pub label: String,
    pub enabled: bool,
}

impl DownloadControl {
    pub fn new(format_id: &str) -> Self {
        Self {
            format_id: format_id.to_string(),
            label: DOWNLOAD_LABEL.to_string(),
            enabled: true,
        }
    }

    pub fn is_busy(&self) -> bool {
        !self.enabled && self.label == PREPARING_LABEL
    }

    /// Switch to the preparing state, returning the state it replaced
    fn mark_preparing(&mut self) -> DownloadControl {
        let saved = self.clone();
        self.label = PREPARING_LABEL.to_string();
        self.enabled = false;
        saved
    }

    /// Switch to the preparing state until the guard is dropped
    pub fn begin_busy(&mut self) -> BusyGuard<'_> {
        let saved = self.mark_preparing();
        BusyGuard {
            control: self,
            saved: Some(saved),
        }
    }
}

/// Restores a control's pre-call state when dropped, whatever the outcome
#[derive(Debug)]
pub struct BusyGuard<'a> {
    control: &'a mut DownloadControl,
    saved: Option<DownloadControl>,
}

impl BusyGuard<'_> {
    pub fn control(&self) -> &DownloadControl {
        &*self.control
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            *self.control = saved;
        }
    }
}

/// Restores a control shown on the page when dropped.
///
/// Leaves the page alone if another session replaced the one it marked.
#[derive(Debug)]
pub struct PageBusyGuard<'a> {
    page: &'a Mutex<PageState>,
    generation: u64,
    index: usize,
    saved: Option<DownloadControl>,
}

impl Drop for PageBusyGuard<'_> {
    fn drop(&mut self) {
        let Some(saved) = self.saved.take() else {
            return;
        };
        let mut state = lock_page(self.page);
        if state.session.as_ref().map(|s| s.generation()) != Some(self.generation) {
            return;
        }
        if let Some(control) = state.controls.get_mut(self.index) {
            *control = saved;
        }
        state.refresh_results();
    }
}
