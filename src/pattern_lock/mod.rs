pub mod controller;
pub mod geometry;
pub mod hit_test;
pub mod input;
pub mod machine;
pub mod mount;
pub mod pattern;
pub mod render;
pub mod sizing;

pub use controller::{PatternCallback, PatternLockController, PatternLockProps};
pub use geometry::{Dot, Layout, LayoutCache, Point, DEFAULT_ARITY};
pub use machine::{GestureSnapshot, GestureState, PatternEvent};
pub use mount::{MountGate, MountState, ThemeMode};
pub use pattern::{format_pattern, Pattern};
pub use render::{Palette, ResolvedTheme};
pub use sizing::{SizePolicy, SizeTracker};
