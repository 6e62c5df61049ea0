use crate::gui::surface::EguiSurface;
use crate::gui::theme::resolve_for_visuals;
use crate::pattern_lock::controller::{PatternLockController, PatternLockProps};
use crate::pattern_lock::geometry::Point;
use crate::pattern_lock::hit_test::CanvasTransform;
use crate::pattern_lock::input::{InputEvent, KeyCode, KeyEvent, PointerEvent, PointerPhase};
use crate::pattern_lock::machine::PatternEvent;
use crate::pattern_lock::mount::{MountGate, ThemeMode};
use crate::pattern_lock::pattern::Pattern;
use crate::pattern_lock::render::{paint, Palette};
use crate::pattern_lock::sizing::{SizePolicy, SizeTracker};
use eframe::egui;

const ACCESS_LABEL: &str = "Pattern lock grid - draw a pattern by connecting dots";
const DISABLED_OPACITY: f32 = 0.5;

pub struct PatternLockOutput {
    pub response: egui::Response,
    /// Pattern events produced this frame, in the order they happened.
    pub events: Vec<PatternEvent>,
}

impl PatternLockOutput {
    /// Latest proposed pattern, if any event this frame changed it.
    pub fn changed(&self) -> Option<&Pattern> {
        self.events.iter().rev().find_map(|event| match event {
            PatternEvent::Changed(pattern) => Some(pattern),
            PatternEvent::Completed(_) => None,
        })
    }

    pub fn completed(&self) -> Option<&Pattern> {
        self.events.iter().find_map(|event| match event {
            PatternEvent::Completed(pattern) => Some(pattern),
            PatternEvent::Changed(_) => None,
        })
    }
}

/// egui front end for [`PatternLockController`].
pub struct PatternLock {
    controller: PatternLockController,
    mount: MountGate,
    sizes: SizeTracker,
    theme_mode: ThemeMode,
    /// Focus as of the end of the previous frame. egui drops focus on
    /// Escape before any widget runs.
    focused: bool,
}

impl PatternLock {
    pub fn new(props: PatternLockProps) -> Self {
        Self::with_controller(PatternLockController::new(
            props,
            SizePolicy::default().regular_size,
        ))
    }

    /// Wraps a controller that may already carry callbacks.
    pub fn with_controller(controller: PatternLockController) -> Self {
        let sizes = SizeTracker::new(SizePolicy {
            regular_size: controller.size(),
            ..SizePolicy::default()
        });
        Self {
            controller,
            mount: MountGate::default(),
            sizes,
            theme_mode: ThemeMode::System,
            focused: false,
        }
    }

    pub fn with_size_policy(mut self, policy: SizePolicy) -> Self {
        self.set_size_policy(policy);
        self
    }

    pub fn with_theme_mode(mut self, mode: ThemeMode) -> Self {
        self.theme_mode = mode;
        self
    }

    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.theme_mode = mode;
    }

    pub fn set_size_policy(&mut self, policy: SizePolicy) {
        self.sizes = SizeTracker::new(policy);
        self.controller.set_size(self.sizes.size());
    }

    pub fn set_props(&mut self, props: PatternLockProps) {
        self.controller.set_props(props);
    }

    pub fn controller(&self) -> &PatternLockController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PatternLockController {
        &mut self.controller
    }

    /// Shows the widget with a pattern that the widget keeps for itself.
    pub fn show_uncontrolled(&mut self, ui: &mut egui::Ui) -> PatternLockOutput {
        let current = self.controller.pattern().indices().to_vec();
        self.show(ui, &current)
    }

    /// Shows the widget for a caller-owned `pattern`. Apply the returned
    /// [`PatternEvent::Changed`] values to keep it in sync.
    pub fn show(&mut self, ui: &mut egui::Ui, pattern: &[usize]) -> PatternLockOutput {
        if let Some(size) = self.sizes.observe(ui.ctx().screen_rect().width()) {
            tracing::debug!(size, "pattern lock resized");
            self.controller.set_size(size);
        }

        let size = self.controller.size();
        let edge = size.min(ui.available_width().max(1.0));
        let desired = egui::vec2(edge, edge);
        let (rect, response) = match &self.controller.props().class_name {
            // A named lock keeps a stable id wherever it is placed.
            Some(name) => {
                let id = ui.make_persistent_id(name);
                let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());
                (rect, ui.interact(rect, id, egui::Sense::click_and_drag()))
            }
            None => ui.allocate_exact_size(desired, egui::Sense::click_and_drag()),
        };
        response.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Other, ACCESS_LABEL));

        if self.mount.begin() {
            paint_placeholder(ui, rect);
            ui.ctx().request_repaint();
            return PatternLockOutput {
                response,
                events: Vec::new(),
            };
        }
        if let Some(theme) = resolve_for_visuals(self.theme_mode, ui.visuals()) {
            self.mount.ready(theme);
        }
        if !self.mount.state().is_interactive() {
            paint_placeholder(ui, rect);
            return PatternLockOutput {
                response,
                events: Vec::new(),
            };
        }

        self.controller.sync_pattern(pattern);
        let transform = CanvasTransform {
            origin: Point::new(rect.min.x, rect.min.y),
            display_size: (rect.width(), rect.height()),
            intrinsic_size: (size, size),
        };

        let keyboard_target = self.focused || response.has_focus() || response.hovered();
        let raw_events = ui.input(|i| i.events.clone());
        let mut events = Vec::new();
        let mut pressed = false;
        for raw in &raw_events {
            let Some(input) = self.translate(raw, &transform, keyboard_target) else {
                continue;
            };
            if matches!(
                input,
                InputEvent::Pointer(PointerEvent {
                    phase: PointerPhase::Down,
                    ..
                })
            ) {
                response.request_focus();
                pressed = true;
            }
            events.extend(self.controller.handle_event(&input, &transform));
        }

        self.focused = pressed || response.has_focus();
        self.update_cursor(ui, &response, &transform);

        let palette = Palette::for_theme(self.mount.state().theme());
        let commands = self.controller.frame(&palette);
        let mut surface = if ui.is_rect_visible(rect) && rect.width() > 0.0 {
            let opacity = if self.controller.props().disabled {
                DISABLED_OPACITY
            } else {
                1.0
            };
            let border = ui.visuals().widgets.noninteractive.bg_stroke.color;
            Some(EguiSurface::new(ui.painter_at(rect), transform, border).with_opacity(opacity))
        } else {
            None
        };
        paint(surface.as_mut(), &commands);

        if self.controller.is_dragging() {
            ui.ctx().request_repaint();
        }

        PatternLockOutput { response, events }
    }

    fn translate(
        &self,
        event: &egui::Event,
        transform: &CanvasTransform,
        keyboard_target: bool,
    ) -> Option<InputEvent> {
        let pointer = |phase, pos: egui::Pos2| {
            InputEvent::Pointer(PointerEvent {
                phase,
                client: Point::new(pos.x, pos.y),
            })
        };
        match event {
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                ..
            } => {
                if *pressed {
                    let inside = transform.contains_client(Point::new(pos.x, pos.y));
                    inside.then(|| pointer(PointerPhase::Down, *pos))
                } else {
                    Some(pointer(PointerPhase::Up, *pos))
                }
            }
            egui::Event::PointerMoved(pos) => {
                let inside = transform.contains_client(Point::new(pos.x, pos.y));
                if self.controller.is_dragging() && !inside {
                    Some(pointer(PointerPhase::Leave, *pos))
                } else {
                    Some(pointer(PointerPhase::Move, *pos))
                }
            }
            egui::Event::PointerGone => Some(pointer(PointerPhase::Leave, egui::Pos2::ZERO)),
            egui::Event::Key {
                key, pressed: true, ..
            } if keyboard_target => {
                let key = match key {
                    egui::Key::Escape => KeyCode::Escape,
                    egui::Key::Delete => KeyCode::Delete,
                    _ => KeyCode::Other,
                };
                Some(InputEvent::Key(KeyEvent { key }))
            }
            _ => None,
        }
    }

    fn update_cursor(&self, ui: &egui::Ui, response: &egui::Response, transform: &CanvasTransform) {
        if !response.hovered() {
            return;
        }
        if self.controller.props().disabled {
            ui.ctx().set_cursor_icon(egui::CursorIcon::NotAllowed);
            return;
        }
        let over_dot = response
            .hover_pos()
            .map(|pos| transform.to_canvas(Point::new(pos.x, pos.y)))
            .is_some_and(|point| self.controller.hover_hint(point));
        if over_dot {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
    }
}

fn paint_placeholder(ui: &egui::Ui, rect: egui::Rect) {
    let visuals = ui.visuals();
    let painter = ui.painter_at(rect);
    painter.rect(
        rect,
        8.0,
        visuals.extreme_bg_color,
        egui::Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color),
    );
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Loading...",
        egui::FontId::proportional(14.0),
        visuals.weak_text_color(),
    );
}

