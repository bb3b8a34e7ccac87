use crate::shared::config::HeaderConfig;

/// How the site header should look at a given scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderStyle {
    pub compact: bool,
    pub hidden: bool,
}

/// Tracks the previous scroll offset to tell scroll direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderScroll {
    last_offset: f64,
}

impl HeaderScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, offset: f64, config: &HeaderConfig) -> HeaderStyle {
        let scrolling_down = offset > self.last_offset;
        self.last_offset = offset;

        if offset <= config.compact_after {
            return HeaderStyle::default();
        }

        HeaderStyle {
            compact: true,
            hidden: scrolling_down && offset > config.hide_after,
        }
    }
}
