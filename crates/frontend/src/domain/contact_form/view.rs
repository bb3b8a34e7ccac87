//! DOM projection of the contact form records.
//!
//! Nothing here decides validity; it only mirrors `Field` and `FormState`.

use contracts::domain::contact_form::{clears_on_reset, Field, FieldKind, SubmissionResult};
use contracts::shared::config::FormConfig;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::shared::dom::{query_all_in, set_class};
use crate::shared::error::DomError;

pub const ERROR_CLASS: &str = "error";
pub const ERROR_MESSAGE_CLASS: &str = "error-message";
pub const SHAKE_CLASS: &str = "shake";
pub const STATUS_SHOW_CLASS: &str = "show";
pub const STATUS_SUCCESS_CLASS: &str = "form-status--success";
pub const STATUS_FAILURE_CLASS: &str = "form-status--failure";

pub struct FormView {
    form: Element,
    controls: Vec<Element>,
    submit: Option<HtmlButtonElement>,
    submit_label: String,
    status: Option<HtmlElement>,
}

impl FormView {
    pub fn bind(form: &Element, config: &FormConfig) -> Result<Self, DomError> {
        let document = form.owner_document().ok_or(DomError::NoDocument)?;

        let controls = query_all_in(form, &config.field_selector)?;
        let submit = form
            .query_selector(&config.submit_selector)?
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let submit_label = submit
            .as_ref()
            .and_then(|button| button.text_content())
            .unwrap_or_default();
        let status = document
            .get_element_by_id(&config.status_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        Ok(Self {
            form: form.clone(),
            controls,
            submit,
            submit_label,
            status,
        })
    }

    pub fn controls(&self) -> &[Element] {
        &self.controls
    }

    /// Build one `Field` record per control, in document order.
    pub fn field_records(&self) -> Vec<Field> {
        self.controls
            .iter()
            .enumerate()
            .map(|(index, control)| {
                let name = control
                    .get_attribute("name")
                    .filter(|name| !name.is_empty())
                    .or_else(|| Some(control.id()).filter(|id| !id.is_empty()))
                    .unwrap_or_else(|| format!("field-{index}"));
                let kind = FieldKind::from_control(
                    &control.tag_name(),
                    control.get_attribute("type").as_deref(),
                );

                Field::new(name, kind, control.has_attribute("required"))
                    .with_value(control_value(control))
            })
            .collect()
    }

    pub fn read_value(&self, index: usize) -> String {
        self.controls
            .get(index)
            .map(control_value)
            .unwrap_or_default()
    }

    /// Mirror the error state of one field: the `error` class plus at most
    /// one `.error-message` right after the control.
    pub fn render_field(&self, index: usize, field: &Field) -> Result<(), DomError> {
        let Some(control) = self.controls.get(index) else {
            return Ok(());
        };

        set_class(control, ERROR_CLASS, field.has_error());

        if let Some(next) = control.next_element_sibling() {
            if next.class_list().contains(ERROR_MESSAGE_CLASS) {
                next.remove();
            }
        }

        let Some(message) = field.error_message.as_deref() else {
            return Ok(());
        };

        let document = control.owner_document().ok_or(DomError::NoDocument)?;
        let annotation = document.create_element("p")?;
        annotation.set_class_name(ERROR_MESSAGE_CLASS);
        annotation.set_text_content(Some(message));

        if let Some(parent) = control.parent_node() {
            parent.insert_before(&annotation, control.next_sibling().as_ref())?;
        }
        Ok(())
    }

    /// Write record values back into every value-bearing control.
    pub fn write_values(&self, fields: &[Field]) {
        for (control, field) in self.controls.iter().zip(fields) {
            let input_type = control.get_attribute("type");
            if clears_on_reset(&control.tag_name(), input_type.as_deref()) {
                set_control_value(control, &field.value);
            }
        }
    }

    pub fn set_shaking(&self, shaking: bool) {
        set_class(&self.form, SHAKE_CLASS, shaking);
    }

    pub fn set_pending(&self, pending: bool, pending_label: &str) {
        let Some(button) = &self.submit else { return };
        button.set_disabled(pending);
        let label = if pending {
            pending_label
        } else {
            self.submit_label.as_str()
        };
        button.set_text_content(Some(label));
    }

    pub fn show_status(&self, result: &SubmissionResult) {
        let Some(status) = &self.status else { return };
        status.set_text_content(Some(&result.message));
        set_class(status, STATUS_SUCCESS_CLASS, result.success);
        set_class(status, STATUS_FAILURE_CLASS, !result.success);
        set_class(status, STATUS_SHOW_CLASS, true);
    }

    pub fn hide_status(&self) {
        if let Some(status) = &self.status {
            set_class(status, STATUS_SHOW_CLASS, false);
        }
    }
}

fn control_value(control: &Element) -> String {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = control.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

fn set_control_value(control: &Element, value: &str) {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(textarea) = control.dyn_ref::<HtmlTextAreaElement>() {
        textarea.set_value(value);
    }
}
