use crate::pattern_lock::geometry::{Layout, Point};
use crate::pattern_lock::hit_test::find_dot_at;
use crate::pattern_lock::input::GestureInput;
use crate::pattern_lock::pattern::Pattern;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging,
}

impl GestureState {
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging)
    }
}

/// Immutable view of the gesture after one transition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GestureSnapshot {
    pub state: GestureState,
    pub pattern: Pattern,
    /// Raw pointer position, only tracked while dragging.
    pub live_point: Option<Point>,
    /// Whether the current drag has selected at least one dot.
    pub selected_in_gesture: bool,
}

impl GestureSnapshot {
    pub fn with_pattern(&self, pattern: Pattern) -> Self {
        Self {
            pattern,
            ..self.clone()
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    pub dot_size: f32,
    pub disabled: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            dot_size: 20.0,
            disabled: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternEvent {
    /// A new pattern value is proposed to the owner.
    Changed(Pattern),
    /// A gesture that selected at least one dot was released.
    Completed(Pattern),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub snapshot: GestureSnapshot,
    pub events: Vec<PatternEvent>,
}

impl Transition {
    fn unchanged(snapshot: &GestureSnapshot) -> Self {
        Self {
            snapshot: snapshot.clone(),
            events: Vec::new(),
        }
    }
}

/// Applies one normalized input to `snapshot`.
///
/// While `config.disabled` is set the gesture is frozen: downs and moves
/// are ignored and a release ends an in-flight drag without completing it.
/// Resets are honoured regardless of drag state or `disabled`.
pub fn reduce(
    snapshot: &GestureSnapshot,
    layout: &Layout,
    config: &GestureConfig,
    input: GestureInput,
) -> Transition {
    match input {
        GestureInput::Down(point) => {
            if config.disabled {
                return Transition::unchanged(snapshot);
            }
            let mut next = GestureSnapshot {
                state: GestureState::Dragging,
                pattern: snapshot.pattern.clone(),
                live_point: Some(point),
                selected_in_gesture: false,
            };
            let mut events = Vec::new();
            if let Some(index) = find_dot_at(point, layout, config.dot_size) {
                next.pattern = Pattern::single(index);
                next.selected_in_gesture = true;
                events.push(PatternEvent::Changed(next.pattern.clone()));
            }
            Transition {
                snapshot: next,
                events,
            }
        }
        GestureInput::Move(point) => {
            if !snapshot.is_dragging() || config.disabled {
                return Transition::unchanged(snapshot);
            }
            let mut next = GestureSnapshot {
                live_point: Some(point),
                ..snapshot.clone()
            };
            let mut events = Vec::new();
            let extended = find_dot_at(point, layout, config.dot_size)
                .and_then(|index| snapshot.pattern.extended(index));
            if let Some(pattern) = extended {
                next.pattern = pattern;
                next.selected_in_gesture = true;
                events.push(PatternEvent::Changed(next.pattern.clone()));
            }
            Transition {
                snapshot: next,
                events,
            }
        }
        GestureInput::Up | GestureInput::Leave => {
            if !snapshot.is_dragging() {
                return Transition::unchanged(snapshot);
            }
            let next = GestureSnapshot {
                state: GestureState::Idle,
                pattern: snapshot.pattern.clone(),
                live_point: None,
                selected_in_gesture: false,
            };
            let mut events = Vec::new();
            if !config.disabled && snapshot.selected_in_gesture && !snapshot.pattern.is_empty() {
                events.push(PatternEvent::Completed(snapshot.pattern.clone()));
            }
            Transition {
                snapshot: next,
                events,
            }
        }
        GestureInput::Reset => {
            let next = snapshot.with_pattern(Pattern::new());
            Transition {
                snapshot: next,
                events: vec![PatternEvent::Changed(Pattern::new())],
            }
        }
    }
}

/// Dot currently under the live pointer during a drag.
pub fn hovered_dot(snapshot: &GestureSnapshot, layout: &Layout, dot_size: f32) -> Option<usize> {
    if !snapshot.is_dragging() {
        return None;
    }
    snapshot
        .live_point
        .and_then(|point| find_dot_at(point, layout, dot_size))
}
