use contracts::shared::config::HeaderConfig;
use contracts::shared::page::header_scroll::HeaderScroll;
use web_sys::{Document, Window};

use crate::shared::dom::{set_class, EventListenerHandle};

pub const COMPACT_CLASS: &str = "site-header--compact";
pub const HIDDEN_CLASS: &str = "site-header--hidden";

/// Compacts the header once the page is scrolled and hides it while
/// scrolling down further.
pub struct ScrollHeaderEffect {
    _listener: EventListenerHandle,
}

impl ScrollHeaderEffect {
    pub fn attach(window: &Window, document: &Document, config: &HeaderConfig) -> Option<Self> {
        let header = document.query_selector(&config.selector).ok().flatten()?;

        let scroll_window = window.clone();
        let config = config.clone();
        let mut scroll = HeaderScroll::new();

        let listener = EventListenerHandle::new(window, "scroll", move |_| {
            let offset = scroll_window.scroll_y().unwrap_or(0.0);
            let style = scroll.on_scroll(offset, &config);
            set_class(&header, COMPACT_CLASS, style.compact);
            set_class(&header, HIDDEN_CLASS, style.hidden);
        });

        match listener {
            Ok(listener) => {
                log::debug!("header: scroll effect attached");
                Some(Self {
                    _listener: listener,
                })
            }
            Err(err) => {
                log::warn!("header: scroll effect not attached: {}", err);
                None
            }
        }
    }
}
