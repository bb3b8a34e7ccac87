//! Contact form enhancement: inline validation and simulated submission.

pub mod controller;
pub mod view;

pub use controller::ContactFormController;
