//! Small wrappers over `web_sys` used by every enhancement.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

use super::error::DomError;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements in the document matching `selector`.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    Ok(elements(document.query_selector_all(selector)?))
}

/// All descendants of `root` matching `selector`.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, DomError> {
    Ok(elements(root.query_selector_all(selector)?))
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

/// An event listener that stays registered while the handle lives.
///
/// Dropping the handle removes the listener and frees the closure.
pub struct EventListenerHandle {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListenerHandle {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListenerHandle {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
