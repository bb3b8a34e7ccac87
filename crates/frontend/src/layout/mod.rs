pub mod header_scroll;
pub mod navigation;

pub use header_scroll::ScrollHeaderEffect;
pub use navigation::NavigationToggle;
