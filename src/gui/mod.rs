mod demo;
mod surface;
pub mod theme;
mod widget;

pub use demo::{apply_pattern_events, output_label, PatternLockDemo};
pub use surface::EguiSurface;
pub use widget::{PatternLock, PatternLockOutput};
