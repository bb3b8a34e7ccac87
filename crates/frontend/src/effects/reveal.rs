use contracts::shared::config::RevealConfig;
use web_sys::Document;

use crate::shared::dom::{query_all, set_class};
use crate::shared::observer::ViewportObserver;

/// Fades content in the first time it scrolls into view.
pub struct ViewportReveal {
    _observer: ViewportObserver,
}

impl ViewportReveal {
    pub fn attach(document: &Document, config: &RevealConfig) -> Option<Self> {
        let elements = match query_all(document, &config.selector) {
            Ok(elements) if !elements.is_empty() => elements,
            Ok(_) => return None,
            Err(err) => {
                log::warn!("reveal: bad selector `{}`: {}", config.selector, err);
                return None;
            }
        };

        let class_name = config.class_name.clone();
        let observer = ViewportObserver::observe_once(&elements, Some(config.threshold), move |el| {
            set_class(el, &class_name, true);
        });

        match observer {
            Ok(observer) => {
                log::debug!("reveal: watching {} element(s)", elements.len());
                Some(Self {
                    _observer: observer,
                })
            }
            Err(err) => {
                log::warn!("reveal: disabled: {}", err);
                None
            }
        }
    }
}
