use super::basic_types::{Coordinates, SizeType};
use super::board::Board;
use super::cell::CellView;
use super::errors::MinefieldError;
use super::results::PressResult;
use super::rules::Rules;
use indexmap::IndexSet;
use log::{info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The game state: a board plus the rules it is played by.
///
/// Sizes are given as `(width, height)` here and everything addressing a
/// single cell takes `(row, col)`.
pub struct Minefield {
    board: Board,
}

impl Minefield {
    pub fn initialize(
        width: SizeType,
        height: SizeType,
        number_of_mines: SizeType,
        rng_seed: u64,
    ) -> Result<Minefield, MinefieldError> {
        Minefield::with_rules(width, height, number_of_mines, rng_seed, Rules::default())
    }

    pub fn with_rules(
        width: SizeType,
        height: SizeType,
        number_of_mines: SizeType,
        rng_seed: u64,
        rules: Rules,
    ) -> Result<Minefield, MinefieldError> {
        let mut rng = StdRng::seed_from_u64(rng_seed);
        let board = Board::new(height, width, number_of_mines, rules, &mut rng)?;
        info!(
            "created {}x{} minefield with {} mines (seed {}, {})",
            height,
            width,
            board.get_mine_locations().len(),
            rng_seed,
            rules.placement
        );
        Ok(Minefield { board })
    }

    pub fn with_mines(
        width: SizeType,
        height: SizeType,
        mine_locations: &[Coordinates],
        rules: Rules,
    ) -> Result<Minefield, MinefieldError> {
        let mine_locations: IndexSet<Coordinates> = mine_locations.iter().cloned().collect();
        let board = Board::with_custom_mines(height, width, mine_locations, rules)?;
        Ok(Minefield { board })
    }

    pub fn apply_press(
        &mut self,
        row: SizeType,
        col: SizeType,
        is_right_button: bool,
    ) -> Result<PressResult, MinefieldError> {
        let result = self.board.apply_press(row, col, is_right_button)?;
        trace!("press on ({}, {}), right: {} -> {}", row, col, is_right_button, result);
        Ok(result)
    }

    pub fn query_cell_view(&self, row: SizeType, col: SizeType) -> Result<CellView, MinefieldError> {
        self.board.query_cell_view(row, col)
    }

    pub fn is_mine(&self, row: SizeType, col: SizeType) -> Result<bool, MinefieldError> {
        Ok(self.board.cell(row, col)?.is_mine())
    }

    pub fn adjacent_mine_count(&self, row: SizeType, col: SizeType) -> Result<u8, MinefieldError> {
        Ok(self.board.cell(row, col)?.adjacent_mine_count())
    }

    pub fn is_revealed(&self, row: SizeType, col: SizeType) -> Result<bool, MinefieldError> {
        Ok(self.board.cell(row, col)?.is_revealed())
    }

    pub fn is_flagged(&self, row: SizeType, col: SizeType) -> Result<bool, MinefieldError> {
        Ok(self.board.cell(row, col)?.is_flagged())
    }

    /// True once the cell received any press.
    pub fn is_targeted(&self, row: SizeType, col: SizeType) -> Result<bool, MinefieldError> {
        Ok(self.board.cell(row, col)?.is_targeted())
    }

    pub fn get_width(&self) -> SizeType {
        self.board.get_width()
    }

    pub fn get_height(&self) -> SizeType {
        self.board.get_height()
    }

    /// Number of distinct mines on the board.
    pub fn get_number_of_mines(&self) -> SizeType {
        self.board.get_mine_locations().len()
    }

    pub fn get_rules(&self) -> Rules {
        self.board.get_rules()
    }

    pub fn get_text_repr(&self) -> String {
        self.board.get_text_repr()
    }
}
