//! URL input component

use crate::utils::format::escape_html;

/// Render the URL field and its submit button
pub fn url_input(value: &str, submit_enabled: bool) -> String {
    format!(
        r#"<div class="input-row"><input id="videoUrl" type="url" placeholder="Paste video URL here..." value="{}"><button id="fetchBtn"{}>Get Formats</button></div>"#,
        escape_html(value),
        if submit_enabled { "" } else { " disabled" }
    )
}
