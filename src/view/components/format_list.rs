//! Format rows with their download controls

use crate::api::models::FormatDescriptor;
use crate::controller::state::DownloadControl;
use crate::utils::format::{escape_html, format_file_size};

/// Shown instead of the grid when the backend lists nothing
pub const NO_FORMATS_MESSAGE: &str = "No formats available for this video.";

/// Render every format in backend order.
///
/// `controls` holds the page's button state per format, by position; a
/// format without a matching control gets an idle one.
pub fn formats_grid(formats: &[FormatDescriptor], controls: &[DownloadControl]) -> String {
    if formats.is_empty() {
        return format!("<p>{}</p>", NO_FORMATS_MESSAGE);
    }

    let mut html = String::new();
    for (i, format) in formats.iter().enumerate() {
        match controls.get(i).filter(|c| c.format_id == format.format_id) {
            Some(control) => html.push_str(&format_item(format, control)),
            None => html.push_str(&format_item(format, &DownloadControl::new(&format.format_id))),
        }
    }
    html
}

/// Render one format row
pub fn format_item(format: &FormatDescriptor, control: &DownloadControl) -> String {
    format!(
        r#"<div class="format-item"><div class="format-info"><div class="format-quality">{}</div><div class="format-details">{}</div></div>{}</div>"#,
        escape_html(&format.quality_label()),
        escape_html(&format_details(format)),
        download_control(control)
    )
}

/// "note • EXT • size", skipping the parts the backend left out
pub fn format_details(format: &FormatDescriptor) -> String {
    let mut parts = Vec::with_capacity(3);
    if let Some(note) = format.format_note.as_deref().filter(|n| !n.is_empty()) {
        parts.push(note.to_string());
    }
    parts.push(format.ext.to_uppercase());
    if let Some(size) = format.filesize.filter(|s| *s > 0) {
        parts.push(format_file_size(size));
    }
    parts.join(" • ")
}

/// Render a download button bound to its format id
pub fn download_control(control: &DownloadControl) -> String {
    format!(
        r#"<button class="download-btn" data-format-id="{}"{}>{}</button>"#,
        escape_html(&control.format_id),
        if control.enabled { "" } else { " disabled" },
        escape_html(&control.label)
    )
}
