use crate::pattern_lock::render::ResolvedTheme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

/// Resolves the configured mode against the host's preference. `System`
/// stays unresolved until the host reports whether it is in dark mode.
pub fn resolve_theme(mode: ThemeMode, host_dark: Option<bool>) -> Option<ResolvedTheme> {
    match mode {
        ThemeMode::Light => Some(ResolvedTheme::Light),
        ThemeMode::Dark => Some(ResolvedTheme::Dark),
        ThemeMode::System => host_dark.map(|dark| {
            if dark {
                ResolvedTheme::Dark
            } else {
                ResolvedTheme::Light
            }
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MountState {
    #[default]
    Unmounted,
    /// Waiting for the readiness signal; only a placeholder is shown.
    Mounting,
    Mounted(ResolvedTheme),
}

impl MountState {
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Mounted(_))
    }

    /// Theme used for painting; light until the readiness signal arrives.
    pub fn theme(self) -> ResolvedTheme {
        match self {
            Self::Mounted(theme) => theme,
            Self::Unmounted | Self::Mounting => ResolvedTheme::Light,
        }
    }
}

pub fn can_transition(from: MountState, to: MountState) -> bool {
    matches!(
        (from, to),
        (MountState::Unmounted, MountState::Mounting)
            | (MountState::Mounting, MountState::Mounted(_))
            | (MountState::Mounted(_), MountState::Mounted(_))
            | (_, MountState::Unmounted)
    ) || from == to
}

/// Gates interactive rendering on an explicit readiness signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct MountGate {
    state: MountState,
}

impl MountGate {
    pub fn state(&self) -> MountState {
        self.state
    }

    /// Records that the host has shown the widget once. Returns `true` on the
    /// first call.
    pub fn begin(&mut self) -> bool {
        self.transition(MountState::Mounting)
    }

    /// Readiness signal: the theme is known, so full rendering may start.
    /// A later call updates the theme of an already mounted widget.
    pub fn ready(&mut self, theme: ResolvedTheme) -> bool {
        self.transition(MountState::Mounted(theme))
    }

    pub fn unmount(&mut self) {
        self.state = MountState::Unmounted;
    }

    fn transition(&mut self, to: MountState) -> bool {
        if self.state == to || !can_transition(self.state, to) {
            return false;
        }
        self.state = to;
        true
    }
}
