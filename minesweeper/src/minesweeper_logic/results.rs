use strum_macros::Display;

#[derive(Clone, Copy, Eq, PartialEq, Display, Debug)]
pub enum PressResult {
    Revealed,
    RevealedMine,
    AlreadyRevealed,
    IsFlagged,
    Flagged,
    FlagRemoved,
}

impl PressResult {
    /// True when the press revealed the cell or changed its flag.
    pub fn changed_board(&self) -> bool {
        match self {
            PressResult::Revealed
            | PressResult::RevealedMine
            | PressResult::Flagged
            | PressResult::FlagRemoved => true,
            PressResult::AlreadyRevealed | PressResult::IsFlagged => false,
        }
    }
}
