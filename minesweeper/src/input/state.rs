use super::adapter::InputAdapter;
use super::events::{InputEvent, PointerButton};
use crate::minesweeper_logic::basic_types::SizeType;
use log::debug;

/// Last cell hit by a button press.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Cursor {
    pub row: SizeType,
    pub col: SizeType,
    pub is_right_button: bool,
}

/// Cell under the pointer, only used for highlighting.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct GhostPosition {
    pub row: SizeType,
    pub col: SizeType,
}

/// A press waiting to be applied to the minefield.
pub type Press = Cursor;

/// Per-frame input state built from the event stream.
#[derive(Default, Debug)]
pub struct InputState {
    cursor: Option<Cursor>,
    ghost: Option<GhostPosition>,
    pointer_active: bool,
    pointer_inside: bool,
    quit_requested: bool,
    pending_presses: Vec<Press>,
}

impl InputState {
    pub fn new() -> InputState {
        InputState::default()
    }

    pub fn handle_event(&mut self, adapter: &InputAdapter, event: InputEvent) {
        match event {
            InputEvent::ButtonDown { x, y, button } => {
                let is_right_button = match button {
                    PointerButton::Left => false,
                    PointerButton::Right => true,
                    PointerButton::Middle => {
                        debug!("ignoring {} button at ({}, {})", button, x, y);
                        return;
                    }
                };
                match adapter.to_cell(x, y) {
                    Some((row, col)) => {
                        let press = Cursor {
                            row,
                            col,
                            is_right_button,
                        };
                        self.cursor = Some(press);
                        self.pending_presses.push(press);
                    }
                    None => debug!("ignoring press outside of the board at ({}, {})", x, y),
                }
            }
            InputEvent::PointerMove { x, y } => {
                self.ghost = adapter
                    .to_cell(x, y)
                    .map(|(row, col)| GhostPosition { row, col });
                self.pointer_active = true;
            }
            InputEvent::WindowEnter => self.pointer_inside = true,
            InputEvent::WindowLeave => self.pointer_inside = false,
            InputEvent::Quit => self.quit_requested = true,
        }
    }

    /// Hands out the presses collected since the last call, oldest first.
    pub fn take_pending_presses(&mut self) -> Vec<Press> {
        std::mem::replace(&mut self.pending_presses, Vec::new())
    }

    pub fn get_cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    pub fn get_ghost(&self) -> Option<GhostPosition> {
        self.ghost
    }

    /// The ghost is drawn once the pointer moved and while it is inside the window.
    pub fn ghost_visible(&self) -> bool {
        self.pointer_active && self.pointer_inside && self.ghost.is_some()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}
