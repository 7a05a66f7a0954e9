//! Compile time configuration of the shipped game.

use crate::minesweeper_logic::basic_types::SizeType;
use std::time::Duration;

/// Size of one cell in pixels.
pub const CELL_SIZE: u32 = 40;
/// Number of cells in the y direction.
pub const GRID_HEIGHT: SizeType = 21;
/// Number of cells in the x direction.
pub const GRID_WIDTH: SizeType = 21;
pub const NUM_MINES: SizeType = 35;
/// Delay between two frames, about 24 frames per second.
pub const FRAME_DELAY: Duration = Duration::from_millis(41);

/// Window size in pixels, one extra pixel fits the closing grid line.
pub const WINDOW_WIDTH: u32 = CELL_SIZE * GRID_WIDTH as u32 + 1;
pub const WINDOW_HEIGHT: u32 = CELL_SIZE * GRID_HEIGHT as u32 + 1;
