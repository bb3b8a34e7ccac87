pub mod config;
pub mod dom;
pub mod error;
pub mod observer;
