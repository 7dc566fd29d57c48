//! Presentation: HTML rendering, clipboard and download hand-off

pub mod clipboard;
pub mod components;
pub mod launcher;
pub mod page;

// Re-export for convenience
pub use launcher::{DownloadLauncher, SystemLauncher};
pub use page::{render_page, results_panel};
