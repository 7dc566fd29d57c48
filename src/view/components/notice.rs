use crate::controller::state::Notice;
use crate::utils::format::escape_html;

/// Render a transient success notice
pub fn notice(notice: &Notice) -> String {
    format!(
        r#"<div class="temp-message success"><i class="icon-check"></i> {}</div>"#,
        escape_html(&notice.message)
    )
}
