//! State behind the page-level behaviours (menu, header, anchors, cards).

pub mod anchors;
pub mod header_scroll;
pub mod keys;
pub mod navigation;
