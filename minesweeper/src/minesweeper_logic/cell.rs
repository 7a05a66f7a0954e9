use super::results::PressResult;
use super::rules::{FlagDisplay, FlagGuard};
use strum_macros::Display;

/// What the renderer should paint for a cell.
#[derive(Clone, Copy, Eq, PartialEq, Display, Debug)]
pub enum CellView {
    Hidden,
    Flagged,
    Numbered(u8),
    MineHit,
}

impl CellView {
    pub fn is_hidden(&self) -> bool {
        self == &CellView::Hidden
    }

    pub fn get_char_repr(&self) -> char {
        match self {
            CellView::Hidden => 'O',
            CellView::Flagged => 'H',
            CellView::Numbered(0) => ' ',
            CellView::Numbered(x) => std::char::from_digit(u32::from(*x), 10).unwrap_or('?'),
            CellView::MineHit => 'X',
        }
    }
}

#[derive(Clone, Copy, Default, Debug)]
pub(crate) struct Cell {
    is_mine: bool,
    adjacent_mine_count: u8,
    revealed: bool,
    flagged: bool,
    targeted: bool,
}

impl Cell {
    pub(crate) fn new(is_mine: bool, adjacent_mine_count: u8) -> Cell {
        debug_assert!(adjacent_mine_count <= 8);
        Cell {
            is_mine,
            adjacent_mine_count,
            ..Cell::default()
        }
    }

    pub(crate) fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub(crate) fn adjacent_mine_count(&self) -> u8 {
        self.adjacent_mine_count
    }

    pub(crate) fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub(crate) fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub(crate) fn is_targeted(&self) -> bool {
        self.targeted
    }

    pub(crate) fn reveal(&mut self, guard: FlagGuard) -> PressResult {
        self.targeted = true;
        if guard == FlagGuard::Protected && self.flagged {
            PressResult::IsFlagged
        } else if self.revealed {
            PressResult::AlreadyRevealed
        } else {
            self.revealed = true;
            if self.is_mine {
                PressResult::RevealedMine
            } else {
                PressResult::Revealed
            }
        }
    }

    pub(crate) fn toggle_flag(&mut self, guard: FlagGuard) -> PressResult {
        self.targeted = true;
        if guard == FlagGuard::Protected && self.revealed && !self.flagged {
            return PressResult::AlreadyRevealed;
        }
        self.flagged = !self.flagged;
        if self.flagged {
            PressResult::Flagged
        } else {
            PressResult::FlagRemoved
        }
    }

    pub(crate) fn view(&self, flag_display: FlagDisplay) -> CellView {
        let flag_visible = match flag_display {
            FlagDisplay::RevealedOnly => self.revealed,
            FlagDisplay::Always => true,
        };
        if self.flagged && flag_visible {
            CellView::Flagged
        } else if !self.revealed {
            CellView::Hidden
        } else if self.is_mine {
            CellView::MineHit
        } else {
            CellView::Numbered(self.adjacent_mine_count)
        }
    }
}
