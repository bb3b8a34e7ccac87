use contracts::shared::config::CardsConfig;
use contracts::shared::page::keys::is_activation_key;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, KeyboardEvent};

use crate::shared::dom::{query_all, EventListenerHandle};

/// Makes cards focusable and lets Enter/Space activate them like a click.
pub struct CardKeyboard {
    _listeners: Vec<EventListenerHandle>,
}

impl CardKeyboard {
    pub fn attach(document: &Document, config: &CardsConfig) -> Option<Self> {
        let cards = query_all(document, &config.selector).ok()?;
        if cards.is_empty() {
            return None;
        }

        let mut listeners = Vec::with_capacity(cards.len());
        for card in cards {
            let _ = card.set_attribute("tabindex", "0");
            let Ok(card) = card.dyn_into::<HtmlElement>() else {
                continue;
            };

            let target = card.clone();
            let listener = EventListenerHandle::new(&card, "keydown", move |event: Event| {
                // keys pressed on links or buttons inside the card keep their own meaning
                let from_card = event
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlElement>().ok())
                    .is_some_and(|el| el == target);
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else { return };
                if from_card && is_activation_key(&event.key()) {
                    event.prevent_default();
                    target.click();
                }
            });

            match listener {
                Ok(listener) => listeners.push(listener),
                Err(err) => log::warn!("cards: listener not attached: {}", err),
            }
        }

        log::debug!("cards: {} keyboard-accessible card(s)", listeners.len());
        Some(Self {
            _listeners: listeners,
        })
    }
}
