//! HTML components

pub mod error_panel;
pub mod format_list;
pub mod notice;
pub mod url_input;
pub mod video_info;

// Re-export for convenience
pub use error_panel::error_panel;
pub use format_list::{download_control, format_item, formats_grid};
pub use notice::notice;
pub use url_input::url_input;
pub use video_info::video_info;
