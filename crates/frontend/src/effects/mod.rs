//! Stateless page effects: each one is an independent set of listeners or
//! an observer, torn down on drop.

pub mod card_keyboard;
pub mod lazy_images;
pub mod reveal;
pub mod smooth_scroll;

pub use card_keyboard::CardKeyboard;
pub use lazy_images::LazyImageLoader;
pub use reveal::ViewportReveal;
pub use smooth_scroll::SmoothAnchorScroll;
