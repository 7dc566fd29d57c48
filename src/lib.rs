//! formatgrab library

pub mod api;
pub mod controller;
pub mod utils;
pub mod view;

// Re-export main types for easier use
pub use api::{Backend, DirectDownload, FormatDescriptor, HttpBackend, VideoMetadata, VideoQuery};
pub use controller::{Completion, Controller, DownloadControl, PageState, Session};
pub use utils::{ClientSettings, FormatGrabError};
pub use view::{DownloadLauncher, SystemLauncher};
