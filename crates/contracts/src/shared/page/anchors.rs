/// Selector for an in-page link's target, or `None` for a bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    let href = href.trim();
    if !href.starts_with('#') || href.len() == 1 {
        return None;
    }
    Some(href)
}

/// Document offset to scroll to so the target sits right under the header.
pub fn scroll_position(target_top: f64, page_offset: f64, header_height: f64) -> f64 {
    (target_top + page_offset - header_height).max(0.0)
}
