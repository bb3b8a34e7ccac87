use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure while talking to the DOM.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global `window`")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        let text = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        DomError::Js(text)
    }
}
