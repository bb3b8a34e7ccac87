//! Page configuration.
//!
//! Every field has a default, so an empty object (or no config at all) gives
//! the stock behaviour. Ids and selectors are the ones the page markup uses.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::contact_form::aggregate::SUCCESS_MESSAGE;
use crate::domain::contact_form::validation::ValidationMessages;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid page config: {field} must be {expected}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub log_level: String,
    pub form: FormConfig,
    pub navigation: NavigationConfig,
    pub header: HeaderConfig,
    pub reveal: RevealConfig,
    pub lazy_images: LazyImagesConfig,
    pub cards: CardsConfig,
    pub anchors: AnchorsConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            form: FormConfig::default(),
            navigation: NavigationConfig::default(),
            header: HeaderConfig::default(),
            reveal: RevealConfig::default(),
            lazy_images: LazyImagesConfig::default(),
            cards: CardsConfig::default(),
            anchors: AnchorsConfig::default(),
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::OutOfRange {
                field: "reveal.threshold",
                expected: "between 0 and 1",
            });
        }
        if self.header.hide_after < self.header.compact_after {
            return Err(ConfigError::OutOfRange {
                field: "header.hide_after",
                expected: "at least header.compact_after",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub form_id: String,
    pub status_id: String,
    pub field_selector: String,
    pub submit_selector: String,
    pub pending_label: String,
    pub success_message: String,
    pub messages: ValidationMessages,
    pub submit_latency_ms: u32,
    pub status_visible_ms: u32,
    pub shake_ms: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: "contactForm".to_string(),
            status_id: "formStatus".to_string(),
            field_selector: "input, textarea".to_string(),
            submit_selector: r#"button[type="submit"]"#.to_string(),
            pending_label: "Sending...".to_string(),
            success_message: SUCCESS_MESSAGE.to_string(),
            messages: ValidationMessages::default(),
            submit_latency_ms: 1500,
            status_visible_ms: 5000,
            shake_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub toggle_id: String,
    pub menu_id: String,
    pub open_icon: String,
    pub closed_icon: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            toggle_id: "navToggle".to_string(),
            menu_id: "main-nav".to_string(),
            open_icon: "✕".to_string(),
            closed_icon: "☰".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub selector: String,
    /// Offset (px) past which the header turns compact.
    pub compact_after: f64,
    /// Offset (px) past which scrolling down hides the header.
    pub hide_after: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            selector: ".site-header".to_string(),
            compact_after: 100.0,
            hide_after: 200.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub threshold: f64,
    pub class_name: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".card, article, .hero-text, .hero-image".to_string(),
            threshold: 0.1,
            class_name: "fade-in".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LazyImagesConfig {
    pub selector: String,
    pub source_attribute: String,
    pub loaded_class: String,
}

impl Default for LazyImagesConfig {
    fn default() -> Self {
        Self {
            selector: "img[data-src]".to_string(),
            source_attribute: "data-src".to_string(),
            loaded_class: "loaded".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardsConfig {
    pub selector: String,
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            selector: ".card".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorsConfig {
    pub selector: String,
}

impl Default for AnchorsConfig {
    fn default() -> Self {
        Self {
            selector: r##"a[href^="#"]"##.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = PageConfig::from_json("{}").unwrap();
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.form.submit_latency_ms, 1500);
        assert_eq!(config.form.status_visible_ms, 5000);
        assert_eq!(config.form.shake_ms, 500);
        assert_eq!(config.header.compact_after, 100.0);
        assert_eq!(config.header.hide_after, 200.0);
        assert_eq!(config.reveal.threshold, 0.1);
    }

    #[test]
    fn test_partial_override() {
        let config = PageConfig::from_json(
            r#"{"log_level":"debug","form":{"submit_latency_ms":10,"messages":{"required":"Pflichtfeld"}}}"#,
        )
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.form.submit_latency_ms, 10);
        assert_eq!(config.form.status_visible_ms, 5000);
        assert_eq!(config.form.messages.required, "Pflichtfeld");
        assert_eq!(
            config.form.messages.invalid_email,
            ValidationMessages::default().invalid_email
        );
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            PageConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_out_of_range_values() {
        let err = PageConfig::from_json(r#"{"reveal":{"threshold":1.5}}"#).unwrap_err();
        assert!(err.to_string().contains("reveal.threshold"));

        let err = PageConfig::from_json(r#"{"header":{"compact_after":300}}"#).unwrap_err();
        assert!(err.to_string().contains("header.hide_after"));
    }
}
