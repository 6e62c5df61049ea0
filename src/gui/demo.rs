use crate::gui::theme::{theme_mode_label, visuals_for_mode};
use crate::gui::widget::PatternLock;
use crate::pattern_lock::machine::PatternEvent;
use crate::pattern_lock::mount::ThemeMode;
use crate::pattern_lock::pattern::{format_pattern, Pattern};
use crate::settings::Settings;
use eframe::egui;

/// Applies widget events to a caller-owned pattern and returns the pattern
/// of the gesture that completed, if any.
pub fn apply_pattern_events(pattern: &mut Vec<usize>, events: &[PatternEvent]) -> Option<Pattern> {
    let mut completed = None;
    for event in events {
        match event {
            PatternEvent::Changed(next) => {
                pattern.clear();
                pattern.extend_from_slice(next.indices());
            }
            PatternEvent::Completed(done) => completed = Some(done.clone()),
        }
    }
    completed
}

pub fn output_label(pattern: &[usize]) -> String {
    format!("Output: \"{}\"", format_pattern(pattern))
}

pub struct PatternLockDemo {
    settings: Settings,
    settings_path: String,
    lock: PatternLock,
    pattern: Vec<usize>,
    last_completed: Option<Pattern>,
    default_visuals: Option<egui::Visuals>,
}

impl PatternLockDemo {
    pub fn new(settings: Settings, settings_path: String) -> Self {
        let lock = PatternLock::new(settings.props())
            .with_size_policy(settings.sizing)
            .with_theme_mode(settings.theme);
        Self {
            settings,
            settings_path,
            lock,
            pattern: Vec::new(),
            last_completed: None,
            default_visuals: None,
        }
    }

    pub fn pattern(&self) -> &[usize] {
        &self.pattern
    }

    pub fn reset(&mut self) {
        self.pattern.clear();
        self.last_completed = None;
    }

    fn set_theme(&mut self, mode: ThemeMode) {
        if self.settings.theme == mode {
            return;
        }
        self.settings.theme = mode;
        self.lock.set_theme_mode(mode);
        if let Err(e) = self.settings.save(&self.settings_path) {
            tracing::warn!("failed to save settings: {e}");
        }
    }

    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading("Pattern Lock");
            ui.label("Draw a pattern by connecting the dots");
            ui.add_space(8.0);

            let output = self.lock.show(ui, &self.pattern);
            if let Some(done) = apply_pattern_events(&mut self.pattern, &output.events) {
                tracing::info!(pattern = %done, "pattern entered");
                self.last_completed = Some(done);
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("\u{21ba} Reset").clicked() {
                    self.reset();
                }
                let mut mode = self.settings.theme;
                egui::ComboBox::from_id_source("pattern_lock_theme")
                    .selected_text(theme_mode_label(mode))
                    .show_ui(ui, |ui| {
                        for option in [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark] {
                            ui.selectable_value(&mut mode, option, theme_mode_label(option));
                        }
                    });
                self.set_theme(mode);
            });

            ui.add_space(4.0);
            ui.monospace(output_label(&self.pattern));
            if let Some(done) = &self.last_completed {
                ui.weak(format!("Last completed: {done}"));
            }
        });
    }
}

impl eframe::App for PatternLockDemo {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let defaults = self
            .default_visuals
            .get_or_insert_with(|| ctx.style().visuals.clone())
            .clone();
        ctx.set_visuals(visuals_for_mode(self.settings.theme, &defaults));

        egui::CentralPanel::default().show(ctx, |ui| self.ui(ui));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changes_replace_pattern_and_completion_is_reported() {
        let mut pattern = vec![7];
        let events = vec![
            PatternEvent::Changed(Pattern::single(0)),
            PatternEvent::Changed(Pattern::from(vec![0, 4])),
            PatternEvent::Changed(Pattern::from(vec![0, 4, 8])),
            PatternEvent::Completed(Pattern::from(vec![0, 4, 8])),
        ];
        let completed = apply_pattern_events(&mut pattern, &events);
        assert_eq!(pattern, vec![0, 4, 8]);
        assert_eq!(completed, Some(Pattern::from(vec![0, 4, 8])));
        assert_eq!(output_label(&pattern), "Output: \"159\"");
    }

    #[test]
    fn reset_event_clears_pattern() {
        let mut pattern = vec![1, 2];
        let completed =
            apply_pattern_events(&mut pattern, &[PatternEvent::Changed(Pattern::new())]);
        assert!(pattern.is_empty());
        assert_eq!(completed, None);
        assert_eq!(output_label(&pattern), "Output: \"\"");
    }

    #[test]
    fn demo_reset_clears_state() {
        let mut demo = PatternLockDemo::new(Settings::default(), "unused.json".into());
        demo.pattern = vec![3, 4];
        demo.reset();
        assert!(demo.pattern().is_empty());
    }
}
