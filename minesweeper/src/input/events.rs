use strum_macros::Display;

#[derive(Clone, Copy, Eq, PartialEq, Hash, Display, Debug)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// Discrete events delivered by the window system, in window pixels.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum InputEvent {
    ButtonDown { x: i32, y: i32, button: PointerButton },
    PointerMove { x: i32, y: i32 },
    WindowEnter,
    WindowLeave,
    Quit,
}

impl InputEvent {
    pub fn left_click(x: i32, y: i32) -> InputEvent {
        InputEvent::ButtonDown {
            x,
            y,
            button: PointerButton::Left,
        }
    }

    pub fn right_click(x: i32, y: i32) -> InputEvent {
        InputEvent::ButtonDown {
            x,
            y,
            button: PointerButton::Right,
        }
    }
}
