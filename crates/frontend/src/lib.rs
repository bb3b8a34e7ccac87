pub mod app;
pub mod domain;
pub mod effects;
pub mod layout;
pub mod shared;

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

use app::App;
use shared::config::load_page_config;
use shared::dom::document;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn boot() {
    let document = match document() {
        Ok(document) => document,
        Err(err) => {
            web_sys::console::error_1(&format!("page enhancements disabled: {err}").into());
            return;
        }
    };

    let loaded = load_page_config(&document);
    let level = loaded
        .as_ref()
        .ok()
        .and_then(|config| config.log_level.parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info);
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(level);

    let config = loaded.unwrap_or_else(|err| {
        log::warn!("{}; using defaults", err);
        Default::default()
    });

    match App::enhance(&document, &config) {
        Ok(app) => APP.with(|slot| {
            slot.borrow_mut().replace(app);
        }),
        Err(err) => log::error!("page enhancements disabled: {}", err),
    }
}

/// Remove every listener, observer and pending timer from the page.
#[wasm_bindgen]
pub fn detach_page() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    if app.is_some() {
        drop(app);
        log::info!("page enhancements detached");
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Ok(document) = document() else { return };
    if document.ready_state() != "loading" {
        boot();
        return;
    }

    let on_ready = Closure::once_into_js(boot);
    let _ = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
}
