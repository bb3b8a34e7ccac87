//! Contact form: field records, validation rules and the simulated
//! submission cycle.

pub mod aggregate;
pub mod field;
pub mod timers;
pub mod validation;

pub use aggregate::{ContactForm, FormState, SubmissionResult, SubmitOutcome};
pub use field::{clears_on_reset, Field, FieldKind};
pub use timers::FormTimer;
pub use validation::{validate, ValidationMessages, ValidationResult};
