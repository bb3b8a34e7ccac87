//! Mobile navigation toggle.

use std::cell::RefCell;
use std::rc::Rc;

use contracts::shared::config::NavigationConfig;
use contracts::shared::page::navigation::NavMenu;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Node};

use crate::shared::dom::{query_all_in, set_class, EventListenerHandle};
use crate::shared::error::DomError;

const ACTIVE_CLASS: &str = "active";

struct NavInner {
    menu: NavMenu,
    toggle: Element,
    nav: Element,
    body: Option<HtmlElement>,
    config: NavigationConfig,
}

impl NavInner {
    fn render(&self) {
        let _ = self
            .toggle
            .set_attribute("aria-expanded", self.menu.aria_expanded());
        set_class(&self.nav, ACTIVE_CLASS, self.menu.expanded);
        self.toggle
            .set_text_content(Some(self.menu.icon(&self.config)));

        if let Some(body) = &self.body {
            let style = body.style();
            let _ = match self.menu.body_overflow() {
                Some(overflow) => style.set_property("overflow", overflow),
                None => style.remove_property("overflow").map(|_| ()),
            };
        }
    }

    fn close(&mut self) {
        if self.menu.close() {
            self.render();
        }
    }

    fn is_outside(&self, target: &Node) -> bool {
        !self.nav.contains(Some(target)) && !self.toggle.contains(Some(target))
    }
}

/// Dropping the toggle closes the menu, so the page never stays scroll-locked.
pub struct NavigationToggle {
    inner: Rc<RefCell<NavInner>>,
    _listeners: Vec<EventListenerHandle>,
}

impl NavigationToggle {
    pub fn attach(document: &Document, config: &NavigationConfig) -> Option<Self> {
        let toggle = document.get_element_by_id(&config.toggle_id)?;
        let nav = document.get_element_by_id(&config.menu_id)?;

        match Self::bind(document, toggle, nav, config) {
            Ok(navigation) => Some(navigation),
            Err(err) => {
                log::warn!("navigation: not enhanced: {}", err);
                None
            }
        }
    }

    fn bind(
        document: &Document,
        toggle: Element,
        nav: Element,
        config: &NavigationConfig,
    ) -> Result<Self, DomError> {
        let links = query_all_in(&nav, "a")?;
        let inner = Rc::new(RefCell::new(NavInner {
            menu: NavMenu::from_aria(toggle.get_attribute("aria-expanded").as_deref()),
            toggle: toggle.clone(),
            nav,
            body: document.body(),
            config: config.clone(),
        }));

        let mut listeners = Vec::with_capacity(links.len() + 2);

        let state = Rc::clone(&inner);
        listeners.push(EventListenerHandle::new(&toggle, "click", move |_| {
            let Ok(mut inner) = state.try_borrow_mut() else { return };
            inner.menu.toggle();
            inner.render();
        })?);

        for link in &links {
            let state = Rc::clone(&inner);
            listeners.push(EventListenerHandle::new(link, "click", move |_| {
                if let Ok(mut inner) = state.try_borrow_mut() {
                    inner.close();
                }
            })?);
        }

        let state = Rc::clone(&inner);
        listeners.push(EventListenerHandle::new(document, "click", move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return;
            };
            let Ok(mut inner) = state.try_borrow_mut() else { return };
            if inner.menu.expanded && inner.is_outside(&target) {
                inner.close();
            }
        })?);

        log::debug!("navigation: attached ({} link(s))", links.len());
        Ok(Self {
            inner,
            _listeners: listeners,
        })
    }
}

impl Drop for NavigationToggle {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.close();
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount() -> (Document, Element) {
        let document = web_sys::window().unwrap().document().unwrap();
        let container = document.create_element("div").unwrap();
        container.set_inner_html(
            r##"<button id="t-nav-toggle" aria-expanded="false">☰</button>
               <nav id="t-nav"><a href="#one">One</a></nav>
               <p id="t-outside">outside</p>"##,
        );
        document.body().unwrap().append_child(&container).unwrap();
        (document, container)
    }

    fn config() -> NavigationConfig {
        NavigationConfig {
            toggle_id: "t-nav-toggle".to_string(),
            menu_id: "t-nav".to_string(),
            ..NavigationConfig::default()
        }
    }

    fn html(document: &Document, id: &str) -> HtmlElement {
        document
            .get_element_by_id(id)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
    }

    fn body_overflow(document: &Document) -> String {
        document
            .body()
            .unwrap()
            .style()
            .get_property_value("overflow")
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn test_toggle_then_outside_click_closes() {
        let (document, container) = mount();
        let _navigation = NavigationToggle::attach(&document, &config()).unwrap();
        let toggle = html(&document, "t-nav-toggle");
        let nav = html(&document, "t-nav");

        toggle.click();
        assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
        assert!(nav.class_list().contains(ACTIVE_CLASS));
        assert_eq!(toggle.text_content().as_deref(), Some("✕"));
        assert_eq!(body_overflow(&document), "hidden");

        html(&document, "t-outside").click();
        assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
        assert!(!nav.class_list().contains(ACTIVE_CLASS));
        assert_eq!(body_overflow(&document), "");

        container.remove();
    }

    #[wasm_bindgen_test]
    fn test_drop_with_open_menu_unlocks_scrolling() {
        let (document, container) = mount();
        let navigation = NavigationToggle::attach(&document, &config()).unwrap();
        let toggle = html(&document, "t-nav-toggle");

        toggle.click();
        assert_eq!(body_overflow(&document), "hidden");

        drop(navigation);
        assert_eq!(body_overflow(&document), "");
        assert!(!html(&document, "t-nav").class_list().contains(ACTIVE_CLASS));

        container.remove();
    }
}
