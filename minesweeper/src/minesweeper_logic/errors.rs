use super::basic_types::SizeType;
use std::fmt;

static INVALID_DIMENSIONS_ERROR: &str = "Invalid size!";
static INVALID_MINE_COUNT_ERROR: &str = "Invalid number of mines!";
static OUT_OF_BOUNDS_ERROR: &str = "Invalid index!";

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum MinefieldError {
    InvalidDimensions {
        height: SizeType,
        width: SizeType,
    },
    InvalidMineCount {
        number_of_mines: SizeType,
        number_of_fields: SizeType,
    },
    OutOfBounds {
        row: SizeType,
        col: SizeType,
    },
}

impl MinefieldError {
    pub fn message(&self) -> &'static str {
        match self {
            MinefieldError::InvalidDimensions { .. } => INVALID_DIMENSIONS_ERROR,
            MinefieldError::InvalidMineCount { .. } => INVALID_MINE_COUNT_ERROR,
            MinefieldError::OutOfBounds { .. } => OUT_OF_BOUNDS_ERROR,
        }
    }
}

impl fmt::Display for MinefieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinefieldError::InvalidDimensions { height, width } => {
                write!(f, "{} ({}x{})", self.message(), height, width)
            }
            MinefieldError::InvalidMineCount {
                number_of_mines,
                number_of_fields,
            } => write!(
                f,
                "{} ({} mines on {} fields)",
                self.message(),
                number_of_mines,
                number_of_fields
            ),
            MinefieldError::OutOfBounds { row, col } => {
                write!(f, "{} ({}, {})", self.message(), row, col)
            }
        }
    }
}

impl std::error::Error for MinefieldError {}
