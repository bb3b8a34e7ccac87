use contracts::shared::config::LazyImagesConfig;
use web_sys::{Document, Element};

use crate::shared::dom::{query_all, set_class};
use crate::shared::observer::ViewportObserver;

/// Swaps in the real `src` of deferred images once they approach the
/// viewport. Without `IntersectionObserver` the images are left alone.
pub struct LazyImageLoader {
    _observer: ViewportObserver,
}

impl LazyImageLoader {
    pub fn attach(document: &Document, config: &LazyImagesConfig) -> Option<Self> {
        let images = query_all(document, &config.selector).ok()?;
        if images.is_empty() {
            return None;
        }

        let source_attribute = config.source_attribute.clone();
        let loaded_class = config.loaded_class.clone();
        let observer = ViewportObserver::observe_once(&images, None, move |img| {
            promote_source(img, &source_attribute, &loaded_class);
        });

        match observer {
            Ok(observer) => {
                log::debug!("lazy images: watching {} image(s)", images.len());
                Some(Self {
                    _observer: observer,
                })
            }
            Err(err) => {
                log::info!("lazy images: IntersectionObserver unavailable: {}", err);
                None
            }
        }
    }
}

fn promote_source(img: &Element, source_attribute: &str, loaded_class: &str) {
    let Some(src) = img.get_attribute(source_attribute) else {
        return;
    };
    if img.set_attribute("src", &src).is_err() {
        return;
    }
    let _ = img.remove_attribute(source_attribute);
    set_class(img, loaded_class, true);
}
