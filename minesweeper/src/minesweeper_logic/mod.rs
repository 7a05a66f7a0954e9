pub mod basic_types;
mod board;
mod cell;
pub mod errors;
pub mod minefield;
pub mod results;
pub mod rules;

pub use cell::CellView;
