use crate::pattern_lock::mount::{resolve_theme, ThemeMode};
use crate::pattern_lock::render::{Color, ResolvedTheme};
use eframe::egui;

pub fn color_to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Theme for the widget given the configured mode and the visuals the host
/// is currently using.
pub fn resolve_for_visuals(mode: ThemeMode, visuals: &egui::Visuals) -> Option<ResolvedTheme> {
    resolve_theme(mode, Some(visuals.dark_mode))
}

/// Visuals the demo window should use for `mode`. `System` keeps whatever
/// the host started with.
pub fn visuals_for_mode(mode: ThemeMode, defaults: &egui::Visuals) -> egui::Visuals {
    match mode {
        ThemeMode::System => defaults.clone(),
        ThemeMode::Light => egui::Visuals::light(),
        ThemeMode::Dark => egui::Visuals::dark(),
    }
}

pub fn theme_mode_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::System => "System",
        ThemeMode::Light => "Light",
        ThemeMode::Dark => "Dark",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_keeps_channels() {
        assert_eq!(
            color_to_color32(Color::rgb(15, 23, 42)),
            egui::Color32::from_rgb(15, 23, 42)
        );
        assert_eq!(color_to_color32(Color::WHITE), egui::Color32::WHITE);
    }

    #[test]
    fn system_mode_follows_host_visuals() {
        assert_eq!(
            resolve_for_visuals(ThemeMode::System, &egui::Visuals::dark()),
            Some(ResolvedTheme::Dark)
        );
        assert_eq!(
            resolve_for_visuals(ThemeMode::System, &egui::Visuals::light()),
            Some(ResolvedTheme::Light)
        );
        assert_eq!(
            resolve_for_visuals(ThemeMode::Light, &egui::Visuals::dark()),
            Some(ResolvedTheme::Light)
        );
    }

    #[test]
    fn mode_switching_is_deterministic() {
        let base = egui::Visuals::light();
        assert!(visuals_for_mode(ThemeMode::Dark, &base).dark_mode);
        assert!(!visuals_for_mode(ThemeMode::Light, &base).dark_mode);
        assert_eq!(visuals_for_mode(ThemeMode::System, &base), base);
    }
}
