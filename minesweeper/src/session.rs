use crate::input::{EventQueue, InputAdapter, InputEvent, InputState};
use crate::minesweeper_logic::minefield::Minefield;
use log::{debug, warn};

/// Outcome of one frame of input handling.
#[derive(Clone, Copy, Default, Eq, PartialEq, Debug)]
pub struct FrameStep {
    pub presses_applied: usize,
    /// Presses that revealed a cell or changed a flag.
    pub cells_changed: usize,
    pub quit: bool,
}

/// Glues the input state to the minefield, one step per frame.
pub struct Session {
    minefield: Minefield,
    adapter: InputAdapter,
    input: InputState,
}

impl Session {
    pub fn new(minefield: Minefield, adapter: InputAdapter) -> Session {
        Session {
            minefield,
            adapter,
            input: InputState::new(),
        }
    }

    /// Feeds the events of a frame in order and applies every press they
    /// contain exactly once. Events after a quit are dropped.
    pub fn step<I: IntoIterator<Item = InputEvent>>(&mut self, events: I) -> FrameStep {
        for event in events {
            self.input.handle_event(&self.adapter, event);
            if self.input.quit_requested() {
                debug!("quit requested");
                break;
            }
        }

        let mut presses_applied = 0;
        let mut cells_changed = 0;
        for press in self.input.take_pending_presses() {
            match self
                .minefield
                .apply_press(press.row, press.col, press.is_right_button)
            {
                Ok(result) => {
                    presses_applied += 1;
                    if result.changed_board() {
                        cells_changed += 1;
                    }
                }
                Err(error) => warn!("ignoring press: {}", error),
            }
        }

        FrameStep {
            presses_applied,
            cells_changed,
            quit: self.input.quit_requested(),
        }
    }

    pub fn step_queue(&mut self, queue: &mut EventQueue) -> FrameStep {
        self.step(queue.drain())
    }

    pub fn get_minefield(&self) -> &Minefield {
        &self.minefield
    }

    pub fn get_input(&self) -> &InputState {
        &self.input
    }

}
