use strum_macros::Display;

/// How mine positions are drawn from the board.
#[derive(Clone, Copy, Eq, PartialEq, Display, Debug)]
pub enum MinePlacement {
    /// Independent draws, the same cell can be picked twice, so the board
    /// may end up with fewer distinct mines than requested.
    WithReplacement,
    /// Distinct cells, exactly the requested number of mines.
    WithoutReplacement,
}

/// When a flagged cell is rendered as a flag.
#[derive(Clone, Copy, Eq, PartialEq, Display, Debug)]
pub enum FlagDisplay {
    /// Only a revealed cell can show its flag, an unrevealed cell is always hidden.
    RevealedOnly,
    Always,
}

/// Whether the flag state blocks presses.
#[derive(Clone, Copy, Eq, PartialEq, Display, Debug)]
pub enum FlagGuard {
    /// Left presses reveal flagged cells and right presses flag revealed ones.
    Unchecked,
    /// Flagged cells can not be revealed and revealed cells can not be flagged.
    Protected,
}

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Rules {
    pub placement: MinePlacement,
    pub flag_display: FlagDisplay,
    pub flag_guard: FlagGuard,
}

impl Rules {
    /// Behaves like the SDL prototypes the game grew out of, except that mines
    /// never collide.
    pub fn faithful() -> Rules {
        Rules {
            placement: MinePlacement::WithoutReplacement,
            flag_display: FlagDisplay::RevealedOnly,
            flag_guard: FlagGuard::Unchecked,
        }
    }

    /// Rules of the desktop game: flags are visible and protect their cell.
    pub fn playable() -> Rules {
        Rules {
            placement: MinePlacement::WithoutReplacement,
            flag_display: FlagDisplay::Always,
            flag_guard: FlagGuard::Protected,
        }
    }

    pub fn with_placement(self, placement: MinePlacement) -> Rules {
        Rules { placement, ..self }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules::faithful()
    }
}
