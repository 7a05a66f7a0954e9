pub mod config;
pub mod input;
mod minesweeper_logic;
pub mod session;

pub use minesweeper_logic::basic_types::{Coordinates, SizeType};
pub use minesweeper_logic::errors::MinefieldError;
pub use minesweeper_logic::minefield::Minefield;
pub use minesweeper_logic::results::PressResult;
pub use minesweeper_logic::rules::{FlagDisplay, FlagGuard, MinePlacement, Rules};
pub use minesweeper_logic::CellView;
