use crate::pattern_lock::controller::PatternLockProps;
use crate::pattern_lock::geometry::DEFAULT_ARITY;
use crate::pattern_lock::mount::ThemeMode;
use crate::pattern_lock::sizing::SizePolicy;
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Dot diameter in pixels, for both drawing and hit-testing.
    #[serde(default = "default_dot_size")]
    pub dot_size: f32,
    #[serde(default = "default_line_width")]
    pub line_width: f32,
    #[serde(default)]
    pub disabled: bool,
    /// Dots per row and column.
    #[serde(default = "default_grid_arity")]
    pub grid_arity: usize,
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default)]
    pub sizing: SizePolicy,
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file that receives log output instead of stdout.
    #[serde(default)]
    pub log_file: Option<String>,
}

fn default_dot_size() -> f32 {
    24.0
}

fn default_line_width() -> f32 {
    4.0
}

fn default_grid_arity() -> usize {
    DEFAULT_ARITY
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dot_size: default_dot_size(),
            line_width: default_line_width(),
            disabled: false,
            grid_arity: default_grid_arity(),
            theme: ThemeMode::default(),
            sizing: SizePolicy::default(),
            debug_logging: false,
            log_file: None,
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Widget properties for these settings. Out-of-range values fall back to
    /// the widget defaults.
    pub fn props(&self) -> PatternLockProps {
        let defaults = PatternLockProps::default();
        let dot_size = if self.dot_size.is_finite() && self.dot_size > 0.0 {
            self.dot_size
        } else {
            tracing::warn!(
                "dot_size {} is invalid; using default {}",
                self.dot_size,
                defaults.dot_size
            );
            defaults.dot_size
        };
        let line_width = if self.line_width.is_finite() && self.line_width > 0.0 {
            self.line_width
        } else {
            tracing::warn!(
                "line_width {} is invalid; using default {}",
                self.line_width,
                defaults.line_width
            );
            defaults.line_width
        };
        let arity = if self.grid_arity == 0 {
            tracing::warn!("grid_arity must be at least 1; using {}", DEFAULT_ARITY);
            DEFAULT_ARITY
        } else {
            self.grid_arity
        };
        PatternLockProps {
            dot_size,
            line_width,
            disabled: self.disabled,
            arity,
            class_name: None,
        }
    }
}
