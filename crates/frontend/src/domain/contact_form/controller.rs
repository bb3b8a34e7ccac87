use std::cell::RefCell;
use std::rc::{Rc, Weak};

use contracts::domain::contact_form::{ContactForm, FormTimer, SubmitOutcome};
use contracts::shared::config::FormConfig;
use gloo_timers::callback::Timeout;
use web_sys::{Document, Element, Event};

use super::view::FormView;
use crate::shared::dom::EventListenerHandle;
use crate::shared::error::DomError;

/// Pending deferred actions, one slot per kind. Dropping a `Timeout` cancels
/// it, so arming a slot again cancels the previous timer of that kind.
#[derive(Default)]
struct FormTimers {
    shake: Option<Timeout>,
    submission: Option<Timeout>,
    status: Option<Timeout>,
}

impl FormTimers {
    fn arm(&mut self, timer: FormTimer, config: &FormConfig, callback: impl FnOnce() + 'static) {
        let handle = Some(Timeout::new(timer.delay_ms(config), callback));
        match timer {
            FormTimer::Shake => self.shake = handle,
            FormTimer::Submission => self.submission = handle,
            FormTimer::StatusHide => self.status = handle,
        }
    }

    fn cancel_all(&mut self) {
        *self = Self::default();
    }
}

struct FormInner {
    model: ContactForm,
    view: FormView,
    config: FormConfig,
    timers: FormTimers,
}

impl FormInner {
    fn render_field(&self, index: usize) {
        let Some(field) = self.model.field(index) else { return };
        if let Err(err) = self.view.render_field(index, field) {
            log::warn!("contact form: cannot render field `{}`: {}", field.name, err);
        }
    }

    fn render_all(&self) {
        for index in 0..self.model.fields().len() {
            self.render_field(index);
        }
    }

    fn sync_values(&mut self) {
        for index in 0..self.model.fields().len() {
            let value = self.view.read_value(index);
            self.model.set_value(index, value);
        }
    }

    /// Stop every timer and take back what they would have reverted.
    fn release(&mut self) {
        self.timers.cancel_all();
        self.view.set_pending(false, &self.config.pending_label);
        self.view.set_shaking(false);
        self.view.hide_status();
    }
}

/// Owns the contact form's field records and submission cycle.
///
/// Dropping the controller removes its listeners, cancels any pending
/// shake, submission or status timer and re-enables the submit button.
pub struct ContactFormController {
    inner: Rc<RefCell<FormInner>>,
    _listeners: Vec<EventListenerHandle>,
}

impl ContactFormController {
    /// Enhance the configured form. A page without the form is not an error.
    pub fn attach(document: &Document, config: &FormConfig) -> Option<Self> {
        let Some(form) = document.get_element_by_id(&config.form_id) else {
            log::debug!("contact form: no #{} on this page", config.form_id);
            return None;
        };

        match Self::bind(&form, config) {
            Ok(controller) => Some(controller),
            Err(err) => {
                log::warn!("contact form: not enhanced: {}", err);
                None
            }
        }
    }

    fn bind(form: &Element, config: &FormConfig) -> Result<Self, DomError> {
        let view = FormView::bind(form, config)?;
        let model = ContactForm::with_messages(
            view.field_records(),
            config.messages.clone(),
            config.success_message.clone(),
        );
        let controls = view.controls().to_vec();

        let inner = Rc::new(RefCell::new(FormInner {
            model,
            view,
            config: config.clone(),
            timers: FormTimers::default(),
        }));

        let mut listeners = Vec::with_capacity(controls.len() * 2 + 1);
        for (index, control) in controls.iter().enumerate() {
            let state = Rc::clone(&inner);
            listeners.push(EventListenerHandle::new(control, "blur", move |_| {
                on_blur(&state, index)
            })?);

            let state = Rc::clone(&inner);
            listeners.push(EventListenerHandle::new(control, "input", move |_| {
                on_input(&state, index)
            })?);
        }

        let state = Rc::clone(&inner);
        listeners.push(EventListenerHandle::new(form, "submit", move |event: Event| {
            event.prevent_default();
            on_submit(&state);
        })?);

        log::info!("contact form: attached with {} field(s)", controls.len());

        Ok(Self {
            inner,
            _listeners: listeners,
        })
    }
}

impl Drop for ContactFormController {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.release();
        }
        log::debug!("contact form: detached");
    }
}

// ============================================================================
// Event handlers
// ============================================================================

fn on_blur(state: &Rc<RefCell<FormInner>>, index: usize) {
    let Ok(mut inner) = state.try_borrow_mut() else { return };
    let value = inner.view.read_value(index);
    if inner.model.blur(index, value).is_some() {
        inner.render_field(index);
    }
}

fn on_input(state: &Rc<RefCell<FormInner>>, index: usize) {
    let Ok(mut inner) = state.try_borrow_mut() else { return };
    let value = inner.view.read_value(index);
    if inner.model.set_value(index, value).is_some() {
        inner.render_field(index);
    }
}

fn on_submit(state: &Rc<RefCell<FormInner>>) {
    let Ok(mut guard) = state.try_borrow_mut() else { return };
    let inner = &mut *guard;

    inner.sync_values();

    let outcome = inner.model.submit();
    match &outcome {
        SubmitOutcome::Ignored => {
            log::debug!("contact form: submission already in flight");
        }
        SubmitOutcome::Rejected { invalid_fields } => {
            log::info!(
                "contact form: blocked, {} invalid field(s)",
                invalid_fields.len()
            );
            inner.render_all();
            inner.view.set_shaking(true);
        }
        SubmitOutcome::Started => {
            log::info!("contact form: sending");
            inner.render_all();
            inner.view.set_pending(true, &inner.config.pending_label);
        }
    }

    let Some(timer) = FormTimer::after_submit(&outcome) else {
        return;
    };
    let weak = Rc::downgrade(state);
    inner.timers.arm(timer, &inner.config, move || match timer {
        FormTimer::Shake => with_inner(&weak, |inner| {
            inner.model.end_shake();
            inner.view.set_shaking(false);
        }),
        _ => complete_submission(&weak),
    });
}

fn complete_submission(weak: &Weak<RefCell<FormInner>>) {
    let status_weak = weak.clone();
    with_inner(weak, move |inner| {
        let Some(result) = inner.model.complete_submission() else {
            return;
        };
        log::info!("contact form: sent");

        inner.view.set_pending(false, &inner.config.pending_label);
        inner.view.write_values(inner.model.fields());
        inner.render_all();
        inner.view.show_status(&result);

        inner
            .timers
            .arm(FormTimer::after_completion(), &inner.config, move || {
                with_inner(&status_weak, |inner| {
                    if inner.model.hide_status() {
                        inner.view.hide_status();
                    }
                });
            });
    });
}

/// Run `f` on the form state if the controller is still alive. A timer
/// callback never clears its own slot; the fired handle is simply replaced
/// by the next timer of the same kind.
fn with_inner(weak: &Weak<RefCell<FormInner>>, f: impl FnOnce(&mut FormInner)) {
    let Some(state) = weak.upgrade() else { return };
    let Ok(mut inner) = state.try_borrow_mut() else { return };
    f(&mut inner);
}
