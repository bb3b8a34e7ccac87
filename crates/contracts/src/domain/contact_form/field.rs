use super::validation::ValidationResult;

// ============================================================================
// Field kind
// ============================================================================

/// What kind of value a control holds, as far as validation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Other,
}

impl FieldKind {
    /// Map a control's tag name and `type` attribute to a kind.
    ///
    /// `tag_name` is compared case-insensitively, so both `TEXTAREA` from the
    /// DOM and `textarea` work.
    pub fn from_control(tag_name: &str, input_type: Option<&str>) -> Self {
        if tag_name.eq_ignore_ascii_case("textarea") {
            return FieldKind::Text;
        }
        if !tag_name.eq_ignore_ascii_case("input") {
            return FieldKind::Other;
        }

        match input_type.map(|t| t.trim().to_ascii_lowercase()).as_deref() {
            None | Some("") | Some("text") | Some("search") | Some("tel") | Some("url") => {
                FieldKind::Text
            }
            Some("email") => FieldKind::Email,
            Some(_) => FieldKind::Other,
        }
    }

}

/// Whether clearing the form empties this control's value.
///
/// Every control with a typed-in value is cleared; toggles, buttons,
/// hidden and file inputs keep theirs.
pub fn clears_on_reset(tag_name: &str, input_type: Option<&str>) -> bool {
    if tag_name.eq_ignore_ascii_case("textarea") {
        return true;
    }
    if !tag_name.eq_ignore_ascii_case("input") {
        return false;
    }

    !matches!(
        input_type.map(|t| t.trim().to_ascii_lowercase()).as_deref(),
        Some("checkbox" | "radio" | "submit" | "button" | "reset" | "image" | "hidden" | "file")
    )
}

// ============================================================================
// Field record
// ============================================================================

/// One input control of the form.
///
/// `valid` and `error_message` always reflect the last validation pass;
/// a fresh field counts as valid until it is first checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub required: bool,
    pub kind: FieldKind,
    pub value: String,
    pub valid: bool,
    pub error_message: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.into(),
            required,
            kind,
            value: String::new(),
            valid: true,
            error_message: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Store the outcome of a validation pass on the record.
    pub fn apply(&mut self, result: &ValidationResult) {
        self.valid = result.valid;
        self.error_message = result.message.clone();
    }

    /// Empty the value and drop any error state.
    pub fn clear(&mut self) {
        self.value.clear();
        self.valid = true;
        self.error_message = None;
    }

    pub fn has_error(&self) -> bool {
        !self.valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_control() {
        assert_eq!(FieldKind::from_control("INPUT", Some("email")), FieldKind::Email);
        assert_eq!(FieldKind::from_control("input", Some("EMAIL")), FieldKind::Email);
        assert_eq!(FieldKind::from_control("INPUT", Some("text")), FieldKind::Text);
        assert_eq!(FieldKind::from_control("INPUT", None), FieldKind::Text);
        assert_eq!(FieldKind::from_control("TEXTAREA", None), FieldKind::Text);
        assert_eq!(FieldKind::from_control("INPUT", Some("checkbox")), FieldKind::Other);
        assert_eq!(FieldKind::from_control("SELECT", None), FieldKind::Other);
    }

    #[test]
    fn test_clears_on_reset() {
        for input_type in [None, Some("text"), Some("email"), Some("number"), Some("password"), Some("date"), Some("time")] {
            assert!(clears_on_reset("INPUT", input_type), "type {input_type:?}");
        }
        assert!(clears_on_reset("TEXTAREA", None));

        for input_type in ["checkbox", "radio", "submit", "button", "hidden", "file", "Checkbox"] {
            assert!(!clears_on_reset("INPUT", Some(input_type)), "type {input_type}");
        }
        assert!(!clears_on_reset("BUTTON", None));
    }

    #[test]
    fn test_clear_resets_error_state() {
        let mut field = Field::new("email", FieldKind::Email, true).with_value("nope");
        field.apply(&ValidationResult::invalid("bad"));
        assert!(field.has_error());

        field.clear();
        assert_eq!(field.value, "");
        assert!(field.valid);
        assert_eq!(field.error_message, None);
    }
}
