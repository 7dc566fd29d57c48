//! Whole-page rendering

use crate::controller::session::Session;
use crate::controller::state::{DownloadControl, PageState};
use crate::view::components;

/// Results panel for a session: header plus the format grid
pub fn results_panel(session: &Session, controls: &[DownloadControl]) -> String {
    let metadata = session.metadata();
    format!(
        r#"<div class="results">{}<div class="formats-grid"><h3>Available Formats:</h3>{}</div></div>"#,
        components::video_info(metadata),
        components::formats_grid(&metadata.formats, controls)
    )
}

/// Standalone HTML document reflecting the current page state
pub fn render_page(page: &PageState) -> String {
    let mut body = String::new();
    body.push_str(&components::url_input(&page.input, page.submit_enabled));

    if page.loading {
        body.push_str(r#"<div class="loading">Fetching video information...</div>"#);
    }
    if let Some(error) = &page.error_html {
        body.push_str(error);
    }
    if let Some(results) = &page.results_html {
        body.push_str(results);
    }
    if let Some(notice) = page.visible_notice() {
        body.push_str(&components::notice(notice));
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>formatgrab</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        body
    )
}
