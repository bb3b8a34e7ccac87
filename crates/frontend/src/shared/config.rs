use contracts::shared::config::{ConfigError, PageConfig};
use web_sys::Document;

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// Read the page config; no config element means defaults.
pub fn load_page_config(document: &Document) -> Result<PageConfig, ConfigError> {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(PageConfig::default());
    };

    let json = element.text_content().unwrap_or_default();
    if json.trim().is_empty() {
        return Ok(PageConfig::default());
    }

    PageConfig::from_json(&json)
}
