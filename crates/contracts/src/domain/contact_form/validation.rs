//! Validation rules for contact form fields.
//!
//! Rules are checked in order and the first failing one wins:
//! required, then email format.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::field::{Field, FieldKind};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email pattern compiles"));

/// User-facing texts for failed rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationMessages {
    pub required: String,
    pub invalid_email: String,
}

impl Default for ValidationMessages {
    fn default() -> Self {
        Self {
            required: REQUIRED_MESSAGE.to_string(),
            invalid_email: INVALID_EMAIL_MESSAGE.to_string(),
        }
    }
}

/// Outcome of one validation pass over one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Trim the way browsers do: Unicode whitespace plus the byte order mark.
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Check a field against the rules without touching it.
pub fn validate(field: &Field, messages: &ValidationMessages) -> ValidationResult {
    let value = trim_input(&field.value);

    if field.required && value.is_empty() {
        return ValidationResult::invalid(messages.required.as_str());
    }

    // an empty optional email is fine
    if field.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        return ValidationResult::invalid(messages.invalid_email.as_str());
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(field: &Field) -> ValidationResult {
        validate(field, &ValidationMessages::default())
    }

    #[test]
    fn test_required_empty_and_whitespace() {
        for value in ["", "   ", "\t\n"] {
            let field = Field::new("name", FieldKind::Text, true).with_value(value);
            assert_eq!(check(&field), ValidationResult::invalid(REQUIRED_MESSAGE));
        }
    }

    #[test]
    fn test_byte_order_mark_counts_as_whitespace() {
        let field = Field::new("name", FieldKind::Text, true).with_value("\u{feff}");
        assert_eq!(check(&field), ValidationResult::invalid(REQUIRED_MESSAGE));

        let field = Field::new("email", FieldKind::Email, true).with_value("a\u{feff}b@c.com");
        assert_eq!(check(&field), ValidationResult::invalid(INVALID_EMAIL_MESSAGE));

        let field = Field::new("email", FieldKind::Email, true).with_value("\u{feff}a@b.com\u{feff}");
        assert!(check(&field).valid);
    }

    #[test]
    fn test_required_wins_over_email() {
        let field = Field::new("email", FieldKind::Email, true).with_value(" ");
        assert_eq!(check(&field).message.as_deref(), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_email_pattern() {
        let cases = [
            ("a@b.com", true),
            ("first.last@mail.example.org", true),
            ("  a@b.com  ", true),
            ("a@b", false),
            ("a b@c.com", false),
            ("@b.com", false),
            ("a@@b.com", false),
            ("plain", false),
        ];
        for (value, expected) in cases {
            let field = Field::new("email", FieldKind::Email, false).with_value(value);
            let result = check(&field);
            assert_eq!(result.valid, expected, "value {value:?}");
            if !expected {
                assert_eq!(result.message.as_deref(), Some(INVALID_EMAIL_MESSAGE));
            }
        }
    }

    #[test]
    fn test_empty_optional_email_is_valid() {
        let field = Field::new("email", FieldKind::Email, false);
        assert_eq!(check(&field), ValidationResult::ok());
    }

    #[test]
    fn test_email_rule_only_for_email_kind() {
        let field = Field::new("subject", FieldKind::Text, false).with_value("a@b");
        assert!(check(&field).valid);
        let field = Field::new("misc", FieldKind::Other, true).with_value("a@b");
        assert!(check(&field).valid);
    }

    #[test]
    fn test_custom_messages() {
        let messages = ValidationMessages {
            required: "Required".into(),
            invalid_email: "Bad email".into(),
        };
        let field = Field::new("email", FieldKind::Email, true).with_value("x");
        assert_eq!(
            validate(&field, &messages).message.as_deref(),
            Some("Bad email")
        );
    }
}
