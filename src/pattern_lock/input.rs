use crate::pattern_lock::geometry::Point;
use crate::pattern_lock::hit_test::CanvasTransform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub client: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// Touch event in client coordinates. `touches` holds the contacts still
/// down, `changed_touches` the ones that triggered this event.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub touches: Vec<Point>,
    pub changed_touches: Vec<Point>,
}

impl TouchEvent {
    pub fn primary(&self) -> Option<Point> {
        self.touches
            .first()
            .or_else(|| self.changed_touches.first())
            .copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Escape,
    Delete,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: KeyCode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Touch(TouchEvent),
    Key(KeyEvent),
}

/// Host-independent input fed to the gesture reducer. Points are in
/// canvas-local intrinsic pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureInput {
    Down(Point),
    Move(Point),
    Up,
    Leave,
    Reset,
}

pub fn normalize(event: &InputEvent, transform: &CanvasTransform) -> Option<GestureInput> {
    match event {
        InputEvent::Pointer(pointer) => {
            let point = transform.to_canvas(pointer.client);
            Some(match pointer.phase {
                PointerPhase::Down => GestureInput::Down(point),
                PointerPhase::Move => GestureInput::Move(point),
                PointerPhase::Up => GestureInput::Up,
                PointerPhase::Leave => GestureInput::Leave,
            })
        }
        InputEvent::Touch(touch) => match touch.phase {
            TouchPhase::Start => touch
                .primary()
                .map(|client| GestureInput::Down(transform.to_canvas(client))),
            TouchPhase::Move => touch
                .primary()
                .map(|client| GestureInput::Move(transform.to_canvas(client))),
            TouchPhase::End => Some(GestureInput::Up),
            TouchPhase::Cancel => Some(GestureInput::Leave),
        },
        InputEvent::Key(key) => match key.key {
            KeyCode::Escape | KeyCode::Delete => Some(GestureInput::Reset),
            KeyCode::Other => None,
        },
    }
}
