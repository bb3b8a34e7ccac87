//! One-shot viewport observation on top of `IntersectionObserver`.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::error::DomError;

/// Calls a handler the first time each observed element becomes visible,
/// then stops watching that element. Disconnects on drop.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    /// Fails when the browser has no `IntersectionObserver`.
    pub fn observe_once<F>(
        elements: &[Element],
        threshold: Option<f64>,
        mut on_visible: F,
    ) -> Result<Self, DomError>
    where
        F: FnMut(&Element) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                on_visible(&target);
                observer.unobserve(&target);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        if let Some(threshold) = threshold {
            options.set_threshold(&JsValue::from_f64(threshold));
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for element in elements {
            observer.observe(element);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
