//! Video header: title, thumbnail and metadata line

use crate::api::models::VideoMetadata;
use crate::utils::format::{escape_html, format_number};

/// Render the video header block
pub fn video_info(metadata: &VideoMetadata) -> String {
    let mut meta_items = String::new();

    if let Some(uploader) = metadata.uploader.as_deref().filter(|u| !u.is_empty()) {
        meta_items.push_str(&meta_item("user", &escape_html(uploader)));
    }
    if let Some(duration) = metadata.duration.as_deref().filter(|d| !d.is_empty()) {
        meta_items.push_str(&meta_item("clock", &escape_html(duration)));
    }
    if let Some(views) = metadata.view_count.filter(|v| *v > 0) {
        meta_items.push_str(&meta_item("eye", &format!("{} views", format_number(views))));
    }

    let thumbnail = match metadata.thumbnail.as_deref().filter(|t| !t.is_empty()) {
        Some(src) => format!(
            r#"<img class="thumbnail" src="{}" alt="Thumbnail">"#,
            escape_html(src)
        ),
        None => String::new(),
    };

    format!(
        r#"<div class="video-info"><h3>{}</h3>{}<div class="video-meta">{}</div></div>"#,
        escape_html(&metadata.title),
        thumbnail,
        meta_items
    )
}

fn meta_item(icon: &str, content: &str) -> String {
    format!(
        r#"<div class="meta-item"><i class="icon-{}"></i> {}</div>"#,
        icon, content
    )
}
