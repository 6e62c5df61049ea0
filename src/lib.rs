pub mod gui;
pub mod logging;
pub mod pattern_lock;
pub mod settings;

pub use pattern_lock::{format_pattern, Pattern, PatternEvent, PatternLockController, PatternLockProps};
