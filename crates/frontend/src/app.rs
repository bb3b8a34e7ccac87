use contracts::shared::config::PageConfig;
use web_sys::Document;

use crate::domain::contact_form::ContactFormController;
use crate::effects::{CardKeyboard, LazyImageLoader, SmoothAnchorScroll, ViewportReveal};
use crate::layout::{NavigationToggle, ScrollHeaderEffect};
use crate::shared::dom::window;
use crate::shared::error::DomError;

/// Every enhancement attached to the current page.
///
/// Each part is optional: markup that lacks the relevant elements simply
/// goes without. Dropping the `App` detaches everything.
pub struct App {
    navigation: Option<NavigationToggle>,
    header: Option<ScrollHeaderEffect>,
    reveal: Option<ViewportReveal>,
    anchors: Option<SmoothAnchorScroll>,
    contact_form: Option<ContactFormController>,
    cards: Option<CardKeyboard>,
    lazy_images: Option<LazyImageLoader>,
}

impl App {
    pub fn enhance(document: &Document, config: &PageConfig) -> Result<Self, DomError> {
        let window = window()?;

        let app = Self {
            navigation: NavigationToggle::attach(document, &config.navigation),
            header: ScrollHeaderEffect::attach(&window, document, &config.header),
            reveal: ViewportReveal::attach(document, &config.reveal),
            anchors: SmoothAnchorScroll::attach(document, &config.anchors, &config.header),
            contact_form: ContactFormController::attach(document, &config.form),
            cards: CardKeyboard::attach(document, &config.cards),
            lazy_images: LazyImageLoader::attach(document, &config.lazy_images),
        };

        log::info!("page enhanced: {}", app.summary().join(", "));
        Ok(app)
    }

    fn summary(&self) -> Vec<&'static str> {
        [
            ("navigation", self.navigation.is_some()),
            ("header", self.header.is_some()),
            ("reveal", self.reveal.is_some()),
            ("anchors", self.anchors.is_some()),
            ("contact form", self.contact_form.is_some()),
            ("cards", self.cards.is_some()),
            ("lazy images", self.lazy_images.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, attached)| attached.then_some(name))
        .collect()
    }
}
