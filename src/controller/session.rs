//! The query lifecycle: one session per successful format listing

use crate::api::models::{VideoMetadata, VideoQuery};
use crate::controller::state::DownloadControl;
use std::sync::atomic::{AtomicU64, Ordering};

/// Result of one successful `/get_formats` call, bound to the URL that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    query: VideoQuery,
    metadata: VideoMetadata,
    generation: u64,
}

impl Session {
    pub fn new(query: VideoQuery, metadata: VideoMetadata, generation: u64) -> Self {
        Self {
            query,
            metadata,
            generation,
        }
    }

    pub fn query(&self) -> &VideoQuery {
        &self.query
    }

    pub fn metadata(&self) -> &VideoMetadata {
        &self.metadata
    }

    /// Generation of the request that produced this session
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// One idle download control per format, in backend order
    pub fn controls(&self) -> Vec<DownloadControl> {
        self.metadata
            .formats
            .iter()
            .map(|f| DownloadControl::new(&f.format_id))
            .collect()
    }
}

/// Proof that a request was started, checked when its response lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Generation counter for one kind of request.
///
/// Last request started wins: a response is applied only while its ticket
/// is still the newest one issued.
#[derive(Debug, Default)]
pub struct RequestGate {
    latest: AtomicU64,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding every earlier ticket
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Supersede every outstanding ticket without starting a request
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}
