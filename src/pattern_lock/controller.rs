use crate::pattern_lock::geometry::{Layout, LayoutCache, Point, DEFAULT_ARITY};
use crate::pattern_lock::hit_test::{find_dot_at, CanvasTransform};
use crate::pattern_lock::input::{normalize, GestureInput, InputEvent};
use crate::pattern_lock::machine::{reduce, GestureConfig, GestureSnapshot, PatternEvent};
use crate::pattern_lock::pattern::Pattern;
use crate::pattern_lock::render::{build_frame, DrawCommand, Palette, RenderStyle};

pub type PatternCallback = Box<dyn FnMut(&Pattern)>;

#[derive(Debug, Clone, PartialEq)]
pub struct PatternLockProps {
    /// Diameter in pixels, used both for drawing and hit-testing.
    pub dot_size: f32,
    pub line_width: f32,
    pub disabled: bool,
    pub arity: usize,
    /// Host tag; the egui widget derives its persistent id from it.
    pub class_name: Option<String>,
}

impl Default for PatternLockProps {
    fn default() -> Self {
        Self {
            dot_size: 20.0,
            line_width: 4.0,
            disabled: false,
            arity: DEFAULT_ARITY,
            class_name: None,
        }
    }
}

impl PatternLockProps {
    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            dot_size: self.dot_size,
            disabled: self.disabled,
        }
    }

    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            dot_size: self.dot_size,
            line_width: self.line_width,
        }
    }
}

/// Host-independent pattern lock component.
///
/// Owns the drag session and the layout. The pattern itself belongs to the
/// caller when [`sync_pattern`](Self::sync_pattern) is used every frame;
/// otherwise the controller keeps the values it proposes.
pub struct PatternLockController {
    props: PatternLockProps,
    size: f32,
    layout: LayoutCache,
    snapshot: GestureSnapshot,
    on_change: Option<PatternCallback>,
    on_complete: Option<PatternCallback>,
}

impl PatternLockController {
    pub fn new(props: PatternLockProps, size: f32) -> Self {
        let layout = LayoutCache::new(size, props.arity);
        Self {
            props,
            size,
            layout,
            snapshot: GestureSnapshot::default(),
            on_change: None,
            on_complete: None,
        }
    }

    pub fn on_pattern_change(mut self, callback: impl FnMut(&Pattern) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn on_pattern_complete(mut self, callback: impl FnMut(&Pattern) + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn props(&self) -> &PatternLockProps {
        &self.props
    }

    pub fn set_props(&mut self, props: PatternLockProps) {
        if props.arity != self.props.arity {
            self.layout.get(self.size, props.arity);
        }
        self.props = props;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.props.disabled = disabled;
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Changes the canvas size. Dot positions follow; selected indices do not.
    pub fn set_size(&mut self, size: f32) {
        self.size = size;
        self.layout.get(size, self.props.arity);
    }

    pub fn layout(&self) -> &Layout {
        self.layout.current()
    }

    pub fn snapshot(&self) -> &GestureSnapshot {
        &self.snapshot
    }

    pub fn pattern(&self) -> &Pattern {
        &self.snapshot.pattern
    }

    pub fn is_dragging(&self) -> bool {
        self.snapshot.is_dragging()
    }

    /// Adopts the caller-owned pattern value.
    pub fn sync_pattern(&mut self, indices: &[usize]) {
        if self.snapshot.pattern.indices() != indices {
            self.snapshot = self.snapshot.with_pattern(Pattern::from_indices(indices));
        }
    }

    /// Normalizes a host event and feeds it to the state machine.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        transform: &CanvasTransform,
    ) -> Vec<PatternEvent> {
        match normalize(event, transform) {
            Some(input) => self.handle(input),
            None => Vec::new(),
        }
    }

    pub fn handle(&mut self, input: GestureInput) -> Vec<PatternEvent> {
        let transition = reduce(
            &self.snapshot,
            self.layout.current(),
            &self.props.gesture_config(),
            input,
        );
        self.snapshot = transition.snapshot;
        for event in &transition.events {
            self.dispatch(event);
        }
        transition.events
    }

    /// Whether `point` sits on a dot while no drag is running, used for the
    /// hover cursor.
    pub fn hover_hint(&self, point: Point) -> bool {
        !self.props.disabled
            && !self.snapshot.is_dragging()
            && find_dot_at(point, self.layout.current(), self.props.dot_size).is_some()
    }

    pub fn frame(&self, palette: &Palette) -> Vec<DrawCommand> {
        build_frame(
            &self.snapshot,
            self.layout.current(),
            &self.props.render_style(),
            palette,
        )
    }

    fn dispatch(&mut self, event: &PatternEvent) {
        match event {
            PatternEvent::Changed(pattern) => {
                if pattern.is_empty() {
                    tracing::debug!("pattern reset");
                }
                if let Some(callback) = self.on_change.as_mut() {
                    callback(pattern);
                }
            }
            PatternEvent::Completed(pattern) => {
                tracing::debug!(len = pattern.len(), "pattern completed");
                if let Some(callback) = self.on_complete.as_mut() {
                    callback(pattern);
                }
            }
        }
    }
}

impl std::fmt::Debug for PatternLockController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternLockController")
            .field("props", &self.props)
            .field("size", &self.size)
            .field("snapshot", &self.snapshot)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn callbacks_fire_in_event_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let change_log = Rc::clone(&log);
        let complete_log = Rc::clone(&log);
        let mut controller = PatternLockController::new(PatternLockProps::default(), 300.0)
            .on_pattern_change(move |p| change_log.borrow_mut().push(format!("change {p}")))
            .on_pattern_complete(move |p| complete_log.borrow_mut().push(format!("done {p}")));

        let center = |i| controller_center(i);
        controller.handle(GestureInput::Down(center(0)));
        controller.handle(GestureInput::Move(center(1)));
        controller.handle(GestureInput::Up);

        assert_eq!(
            log.borrow().as_slice(),
            &["change 1", "change 12", "done 12"]
        );
    }

    fn controller_center(index: usize) -> Point {
        Layout::new(300.0, DEFAULT_ARITY).center(index).unwrap()
    }

    #[test]
    fn resize_moves_dots_but_keeps_indices() {
        let mut controller = PatternLockController::new(PatternLockProps::default(), 300.0);
        controller.sync_pattern(&[0, 4, 8]);
        controller.set_size(250.0);
        assert_eq!(controller.pattern().indices(), &[0, 4, 8]);
        assert_eq!(controller.layout().center(4), Some(Point::new(125.0, 125.0)));
    }

    #[test]
    fn controlled_value_overrides_proposals() {
        let mut controller = PatternLockController::new(PatternLockProps::default(), 300.0);
        controller.handle(GestureInput::Down(controller_center(3)));
        assert_eq!(controller.pattern().indices(), &[3]);
        controller.sync_pattern(&[]);
        controller.handle(GestureInput::Move(controller_center(3)));
        assert_eq!(controller.pattern().indices(), &[3]);
    }

    #[test]
    fn hover_hint_only_when_idle_and_enabled() {
        let mut controller = PatternLockController::new(PatternLockProps::default(), 300.0);
        assert!(controller.hover_hint(controller_center(5)));
        assert!(!controller.hover_hint(Point::new(0.0, 0.0)));
        controller.set_disabled(true);
        assert!(!controller.hover_hint(controller_center(5)));
    }

    #[test]
    fn arity_change_rebuilds_layout() {
        let mut controller = PatternLockController::new(PatternLockProps::default(), 300.0);
        controller.set_props(PatternLockProps {
            arity: 4,
            ..PatternLockProps::default()
        });
        assert_eq!(controller.layout().len(), 16);
    }
}
