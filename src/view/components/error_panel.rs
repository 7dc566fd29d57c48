//! Error panel with its "Try Again" control

use crate::utils::format::escape_html;

/// Render the error panel. The retry button reloads the whole client.
pub fn error_panel(message: &str) -> String {
    format!(
        r#"<div class="error"><i class="icon-warning"></i><h3>Oops! Something went wrong</h3><p>{}</p><button class="retry-btn" data-action="reload">Try Again</button></div>"#,
        escape_html(message)
    )
}
