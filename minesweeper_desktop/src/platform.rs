use minesweeper::input::{InputEvent, PointerButton};
use winit::event::{ElementState, MouseButton, WindowEvent};

/// Translates winit window events into game input events.
///
/// winit does not put the pointer position on button events, so the last
/// position seen in a `CursorMoved` is tracked here.
#[derive(Default, Debug)]
pub struct PointerTracker {
    position: Option<(i32, i32)>,
}

impl PointerTracker {
    pub fn new() -> PointerTracker {
        PointerTracker::default()
    }

    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => Some(self.moved(position.x, position.y)),
            WindowEvent::CursorEntered { .. } => Some(InputEvent::WindowEnter),
            WindowEvent::CursorLeft { .. } => Some(InputEvent::WindowLeave),
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => self.pressed(*button),
            WindowEvent::CloseRequested => Some(InputEvent::Quit),
            _ => None,
        }
    }

    pub fn moved(&mut self, x: f64, y: f64) -> InputEvent {
        let (x, y) = (x.floor() as i32, y.floor() as i32);
        self.position = Some((x, y));
        InputEvent::PointerMove { x, y }
    }

    pub fn pressed(&self, button: MouseButton) -> Option<InputEvent> {
        let button = match button {
            MouseButton::Left => PointerButton::Left,
            MouseButton::Right => PointerButton::Right,
            MouseButton::Middle => PointerButton::Middle,
            _ => return None,
        };
        let (x, y) = self.position?;
        Some(InputEvent::ButtonDown { x, y, button })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn press_uses_last_position() {
        let mut tracker = PointerTracker::new();
        assert_eq!(None, tracker.pressed(MouseButton::Left));
        assert_eq!(
            InputEvent::PointerMove { x: 81, y: 40 },
            tracker.moved(81.7, 40.2)
        );
        assert_eq!(
            Some(InputEvent::right_click(81, 40)),
            tracker.pressed(MouseButton::Right)
        );
        assert_eq!(None, tracker.pressed(MouseButton::Back));
    }

    #[test]
    fn close_requested_quits() {
        let mut tracker = PointerTracker::new();
        assert_eq!(Some(InputEvent::Quit), tracker.translate(&WindowEvent::CloseRequested));
        assert_eq!(None, tracker.translate(&WindowEvent::Focused(true)));
    }
}
