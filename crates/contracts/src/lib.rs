//! Target-independent core of the landing page enhancements.
//!
//! Everything here is plain data and state transitions; the wasm crate
//! projects it onto the DOM.

pub mod domain;
pub mod shared;
