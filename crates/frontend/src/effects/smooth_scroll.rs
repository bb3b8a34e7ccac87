use contracts::shared::config::{AnchorsConfig, HeaderConfig};
use contracts::shared::page::anchors::{anchor_target, scroll_position};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::shared::dom::{query_all, window, EventListenerHandle};
use crate::shared::error::DomError;

/// Smoothly scrolls in-page links to their target, leaving room for the
/// sticky header.
pub struct SmoothAnchorScroll {
    _listeners: Vec<EventListenerHandle>,
}

impl SmoothAnchorScroll {
    pub fn attach(
        document: &Document,
        config: &AnchorsConfig,
        header: &HeaderConfig,
    ) -> Option<Self> {
        let anchors = query_all(document, &config.selector).ok()?;
        if anchors.is_empty() {
            return None;
        }

        let mut listeners = Vec::with_capacity(anchors.len());
        for anchor in anchors {
            let link = anchor.clone();
            let document = document.clone();
            let header_selector = header.selector.clone();

            let listener = EventListenerHandle::new(&anchor, "click", move |event: Event| {
                event.prevent_default();
                let Some(href) = link.get_attribute("href") else { return };
                if let Err(err) = scroll_to_anchor(&document, &header_selector, &href) {
                    log::debug!("anchors: cannot scroll to `{}`: {}", href, err);
                }
            });

            match listener {
                Ok(listener) => listeners.push(listener),
                Err(err) => log::warn!("anchors: listener not attached: {}", err),
            }
        }

        log::debug!("anchors: {} in-page link(s)", listeners.len());
        Some(Self {
            _listeners: listeners,
        })
    }
}

fn scroll_to_anchor(document: &Document, header_selector: &str, href: &str) -> Result<(), DomError> {
    let Some(selector) = anchor_target(href) else {
        return Ok(());
    };
    let Some(target) = document.query_selector(selector)? else {
        return Ok(());
    };

    let window = window()?;
    let header_height = document
        .query_selector(header_selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| f64::from(el.offset_height()))
        .unwrap_or(0.0);

    let top = scroll_position(
        target.get_bounding_client_rect().top(),
        window.scroll_y()?,
        header_height,
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}
