use crate::minesweeper_logic::basic_types::{Coordinates, SizeType};
use std::convert::TryFrom;
use std::num::NonZeroU32;

/// Converts window pixels to cell coordinates.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct InputAdapter {
    cell_size: NonZeroU32,
    width: SizeType,
    height: SizeType,
}

impl InputAdapter {
    pub fn new(cell_size: NonZeroU32, width: SizeType, height: SizeType) -> InputAdapter {
        InputAdapter {
            cell_size,
            width,
            height,
        }
    }

    /// `None` when the pixel is not above a cell of the board.
    pub fn to_cell(&self, x: i32, y: i32) -> Option<Coordinates> {
        let cell_size = self.cell_size.get() as SizeType;
        let col = SizeType::try_from(x).ok()? / cell_size;
        let row = SizeType::try_from(y).ok()? / cell_size;
        if row < self.height && col < self.width {
            Some((row, col))
        } else {
            None
        }
    }

    /// Top left pixel of a cell.
    pub fn to_pixel(&self, row: SizeType, col: SizeType) -> (i32, i32) {
        let cell_size = self.cell_size.get() as i32;
        (col as i32 * cell_size, row as i32 * cell_size)
    }
}
