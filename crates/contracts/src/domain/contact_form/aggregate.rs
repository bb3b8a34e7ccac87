use super::field::Field;
use super::validation::{validate, ValidationMessages, ValidationResult};

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent.";

// ============================================================================
// Form state
// ============================================================================

/// Outcome of the last completed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
}

/// Aggregate state of one submission cycle.
///
/// `last_result` survives hiding the status; only `status_visible` flips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub submitting: bool,
    pub last_result: Option<SubmissionResult>,
    pub status_visible: bool,
    pub shaking: bool,
}

/// What a call to [`ContactForm::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; indices of the failing fields.
    Rejected { invalid_fields: Vec<usize> },
    /// All fields passed and the simulated request is in flight.
    Started,
    /// A submission is already in flight; nothing changed.
    Ignored,
}

// ============================================================================
// Aggregate
// ============================================================================

/// Field records plus submission state of the contact form.
///
/// Timers live outside: the caller schedules them after `submit` and
/// reports back through `end_shake`, `complete_submission` and `hide_status`.
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: Vec<Field>,
    state: FormState,
    messages: ValidationMessages,
    success_message: String,
}

impl ContactForm {
    pub fn new(fields: Vec<Field>) -> Self {
        Self::with_messages(fields, ValidationMessages::default(), SUCCESS_MESSAGE)
    }

    pub fn with_messages(
        fields: Vec<Field>,
        messages: ValidationMessages,
        success_message: impl Into<String>,
    ) -> Self {
        Self {
            fields,
            state: FormState::default(),
            messages,
            success_message: success_message.into(),
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Run the rules on one field and record the result on it.
    pub fn validate_field(&mut self, index: usize) -> Option<ValidationResult> {
        let field = self.fields.get_mut(index)?;
        let result = validate(field, &self.messages);
        field.apply(&result);
        Some(result)
    }

    /// Value changed. Re-validates only a field that is currently in error,
    /// so a message disappears as soon as the input is fixed.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) -> Option<ValidationResult> {
        let field = self.fields.get_mut(index)?;
        field.value = value.into();
        if field.has_error() {
            self.validate_field(index)
        } else {
            None
        }
    }

    /// Focus lost: take the final value and always validate.
    pub fn blur(&mut self, index: usize, value: impl Into<String>) -> Option<ValidationResult> {
        let field = self.fields.get_mut(index)?;
        field.value = value.into();
        self.validate_field(index)
    }

    /// Validate every field (no short-circuit, each gets its annotation).
    pub fn validate_all(&mut self) -> bool {
        let mut all_valid = true;
        for index in 0..self.fields.len() {
            if let Some(result) = self.validate_field(index) {
                all_valid &= result.valid;
            }
        }
        all_valid
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state.submitting {
            return SubmitOutcome::Ignored;
        }

        if !self.validate_all() {
            self.state.shaking = true;
            let invalid_fields = self
                .fields
                .iter()
                .enumerate()
                .filter(|(_, f)| !f.valid)
                .map(|(i, _)| i)
                .collect();
            return SubmitOutcome::Rejected { invalid_fields };
        }

        self.state.submitting = true;
        SubmitOutcome::Started
    }

    pub fn end_shake(&mut self) {
        self.state.shaking = false;
    }

    /// The simulated request finished. Returns `None` when nothing was in
    /// flight.
    pub fn complete_submission(&mut self) -> Option<SubmissionResult> {
        if !self.state.submitting {
            return None;
        }

        let result = SubmissionResult {
            success: true,
            message: self.success_message.clone(),
        };

        self.state.submitting = false;
        self.state.last_result = Some(result.clone());
        self.state.status_visible = true;
        self.fields.iter_mut().for_each(Field::clear);

        Some(result)
    }

    /// Returns `true` if the status was visible.
    pub fn hide_status(&mut self) -> bool {
        std::mem::replace(&mut self.state.status_visible, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact_form::field::FieldKind;
    use crate::domain::contact_form::validation::REQUIRED_MESSAGE;

    fn contact_form() -> ContactForm {
        ContactForm::new(vec![
            Field::new("name", FieldKind::Text, true),
            Field::new("email", FieldKind::Email, true),
            Field::new("company", FieldKind::Text, false),
            Field::new("message", FieldKind::Text, true),
        ])
    }

    fn fill_valid(form: &mut ContactForm) {
        form.set_value(0, "Ada");
        form.set_value(1, "ada@example.com");
        form.set_value(3, "Hello there");
    }

    #[test]
    fn test_submit_with_empty_required_field_is_rejected() {
        let mut form = contact_form();
        form.set_value(0, "Ada");
        form.set_value(1, "ada@example.com");

        let outcome = form.submit();

        assert_eq!(outcome, SubmitOutcome::Rejected { invalid_fields: vec![3] });
        assert!(!form.state().submitting);
        assert!(form.state().shaking);
        assert!(!form.state().status_visible);
        assert_eq!(form.state().last_result, None);
        assert_eq!(
            form.field(3).and_then(|f| f.error_message.as_deref()),
            Some(REQUIRED_MESSAGE)
        );

        form.end_shake();
        assert!(!form.state().shaking);
        assert!(!form.state().submitting);
    }

    #[test]
    fn test_rejection_annotates_every_invalid_field() {
        let mut form = contact_form();
        form.set_value(1, "not-an-email");

        match form.submit() {
            SubmitOutcome::Rejected { invalid_fields } => assert_eq!(invalid_fields, vec![0, 1, 3]),
            other => panic!("unexpected outcome {other:?}"),
        }
        assert!(form.fields().iter().filter(|f| f.has_error()).count() == 3);
    }

    #[test]
    fn test_full_submission_cycle() {
        let mut form = contact_form();
        fill_valid(&mut form);

        assert_eq!(form.submit(), SubmitOutcome::Started);
        assert!(form.state().submitting);
        assert!(!form.state().shaking);

        let result = form.complete_submission().expect("submission in flight");
        assert!(result.success);
        assert_eq!(result.message, SUCCESS_MESSAGE);
        assert!(!form.state().submitting);
        assert!(form.state().status_visible);
        assert!(form.fields().iter().all(|f| f.value.is_empty()));

        assert!(form.hide_status());
        assert!(!form.state().status_visible);
        assert_eq!(form.state().last_result, Some(result));
    }

    #[test]
    fn test_resubmit_while_submitting_is_ignored() {
        let mut form = contact_form();
        fill_valid(&mut form);

        assert_eq!(form.submit(), SubmitOutcome::Started);
        assert_eq!(form.submit(), SubmitOutcome::Ignored);
        assert!(form.state().submitting);

        assert!(form.complete_submission().is_some());
        // a second, stale completion must not produce another result
        assert_eq!(form.complete_submission(), None);
    }

    #[test]
    fn test_input_only_revalidates_fields_in_error() {
        let mut form = contact_form();

        // untouched field: typing does not show errors yet
        assert_eq!(form.set_value(1, "a@b"), None);
        assert!(form.field(1).is_some_and(|f| f.valid));

        // blur shows the error
        let result = form.blur(1, "a@b").expect("field exists");
        assert!(!result.valid);

        // fixing the value clears it while typing
        let result = form.set_value(1, "a@b.com").expect("revalidated");
        assert!(result.valid);
        assert!(form.field(1).is_some_and(|f| f.error_message.is_none()));
    }

    #[test]
    fn test_validate_twice_is_stable() {
        let mut form = contact_form();
        let first = form.validate_field(0);
        let second = form.validate_field(0);
        assert_eq!(first, second);
        assert_eq!(
            form.field(0).and_then(|f| f.error_message.clone()),
            Some(REQUIRED_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_unknown_field() {
        let mut form = contact_form();
        assert_eq!(form.validate_field(42), None);
        assert_eq!(form.blur(42, "x"), None);
    }

    #[test]
    fn test_hide_status_without_status() {
        let mut form = contact_form();
        assert!(!form.hide_status());
    }
}
