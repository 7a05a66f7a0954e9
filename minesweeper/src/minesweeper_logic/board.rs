use super::basic_types::{Coordinates, SizeType};
use super::cell::{Cell, CellView};
use super::errors::MinefieldError;
use super::results::PressResult;
use super::rules::{MinePlacement, Rules};
use indexmap::IndexSet;
use log::debug;
use rand::Rng;

const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

fn check_dimensions(height: SizeType, width: SizeType) -> Result<SizeType, MinefieldError> {
    match width.checked_mul(height) {
        Some(number_of_fields) if number_of_fields > 0 => Ok(number_of_fields),
        _ => Err(MinefieldError::InvalidDimensions { height, width }),
    }
}

fn generate_mine_locations<R: Rng>(
    height: SizeType,
    width: SizeType,
    number_of_mines: SizeType,
    placement: MinePlacement,
    rng: &mut R,
) -> Result<IndexSet<Coordinates>, MinefieldError> {
    let number_of_fields = check_dimensions(height, width)?;
    if number_of_mines > number_of_fields {
        return Err(MinefieldError::InvalidMineCount {
            number_of_mines,
            number_of_fields,
        });
    }

    let to_coordinates = |index: SizeType| (index / width, index % width);
    let mine_locations: IndexSet<Coordinates> = match placement {
        MinePlacement::WithReplacement => (0..number_of_mines)
            .map(|_| to_coordinates(rng.gen_range(0, number_of_fields)))
            .collect(),
        MinePlacement::WithoutReplacement => {
            rand::seq::index::sample(rng, number_of_fields, number_of_mines)
                .into_iter()
                .map(to_coordinates)
                .collect()
        }
    };

    if mine_locations.len() < number_of_mines {
        debug!(
            "{} of {} mines collided during placement",
            number_of_mines - mine_locations.len(),
            number_of_mines
        );
    }
    Ok(mine_locations)
}

fn get_neighbor_fields(
    height: SizeType,
    width: SizeType,
    row: SizeType,
    col: SizeType,
) -> Vec<Coordinates> {
    fn add(u: SizeType, i: i8) -> Option<SizeType> {
        if i.is_negative() {
            u.checked_sub(i.wrapping_abs() as u8 as SizeType)
        } else {
            u.checked_add(i as SizeType)
        }
    }

    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|offset| match (add(row, offset.0), add(col, offset.1)) {
            (Some(r), Some(c)) if r < height && c < width => Some((r, c)),
            _ => None,
        })
        .collect()
}

fn get_field_value(
    height: SizeType,
    width: SizeType,
    row: SizeType,
    col: SizeType,
    mine_locations: &IndexSet<Coordinates>,
) -> u8 {
    get_neighbor_fields(height, width, row, col)
        .iter()
        .filter(|coords| mine_locations.contains(*coords))
        .count() as u8
}

fn generate_cells(
    height: SizeType,
    width: SizeType,
    mine_locations: &IndexSet<Coordinates>,
) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(height * width);
    for r in 0..height {
        for c in 0..width {
            let is_mine = mine_locations.contains(&(r, c));
            let value = get_field_value(height, width, r, c, mine_locations);
            cells.push(Cell::new(is_mine, value));
        }
    }
    cells
}

/// Owned grid of cells, stored row-major.
pub struct Board {
    height: SizeType,
    width: SizeType,
    rules: Rules,
    mine_locations: IndexSet<Coordinates>,
    cells: Vec<Cell>,
}

impl Board {
    pub fn with_custom_mines(
        height: SizeType,
        width: SizeType,
        mine_locations: IndexSet<Coordinates>,
        rules: Rules,
    ) -> Result<Board, MinefieldError> {
        check_dimensions(height, width)?;
        if let Some(&(row, col)) = mine_locations
            .iter()
            .find(|(row, col)| *row >= height || *col >= width)
        {
            return Err(MinefieldError::OutOfBounds { row, col });
        }
        let cells = generate_cells(height, width, &mine_locations);
        Ok(Board {
            height,
            width,
            rules,
            mine_locations,
            cells,
        })
    }

    pub fn new<R: Rng>(
        height: SizeType,
        width: SizeType,
        number_of_mines: SizeType,
        rules: Rules,
        rng: &mut R,
    ) -> Result<Board, MinefieldError> {
        let mine_locations =
            generate_mine_locations(height, width, number_of_mines, rules.placement, rng)?;
        Board::with_custom_mines(height, width, mine_locations, rules)
    }

    pub fn get_height(&self) -> SizeType {
        self.height
    }

    pub fn get_width(&self) -> SizeType {
        self.width
    }

    pub fn get_rules(&self) -> Rules {
        self.rules
    }

    pub fn get_mine_locations(&self) -> &IndexSet<Coordinates> {
        &self.mine_locations
    }

    fn index_of(&self, row: SizeType, col: SizeType) -> Result<usize, MinefieldError> {
        if row >= self.height || col >= self.width {
            Err(MinefieldError::OutOfBounds { row, col })
        } else {
            Ok(row * self.width + col)
        }
    }

    pub(crate) fn cell(&self, row: SizeType, col: SizeType) -> Result<&Cell, MinefieldError> {
        let index = self.index_of(row, col)?;
        Ok(&self.cells[index])
    }

    pub fn apply_press(
        &mut self,
        row: SizeType,
        col: SizeType,
        is_right_button: bool,
    ) -> Result<PressResult, MinefieldError> {
        let index = self.index_of(row, col)?;
        let guard = self.rules.flag_guard;
        let cell = &mut self.cells[index];
        if is_right_button {
            Ok(cell.toggle_flag(guard))
        } else {
            Ok(cell.reveal(guard))
        }
    }

    pub fn query_cell_view(&self, row: SizeType, col: SizeType) -> Result<CellView, MinefieldError> {
        Ok(self.cell(row, col)?.view(self.rules.flag_display))
    }

    /// One line per row, using the char representation of each view.
    pub fn get_text_repr(&self) -> String {
        let mut text = String::with_capacity((self.width + 1) * self.height);
        for (index, cell) in self.cells.iter().enumerate() {
            text.push(cell.view(self.rules.flag_display).get_char_repr());
            if (index + 1) % self.width == 0 {
                text.push('\n');
            }
        }
        text
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::minesweeper_logic::rules::{FlagDisplay, FlagGuard};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn layout(mines: &[Coordinates]) -> IndexSet<Coordinates> {
        mines.iter().cloned().collect()
    }

    // O O 1 M 1 0
    // O 1 2 2 1 0
    // 1 2 M 2 1 0
    // M 3 3 M 1 0
    // 2 M 2 1 1 0
    fn create_board_5x6() -> Board {
        let mine_locations = layout(&[(0, 3), (3, 0), (3, 3), (2, 2), (4, 1)]);
        Board::with_custom_mines(5, 6, mine_locations, Rules::faithful()).unwrap()
    }

    #[test]
    fn single_center_mine() {
        let board = Board::with_custom_mines(3, 3, layout(&[(1, 1)]), Rules::faithful()).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                let cell = board.cell(row, col).unwrap();
                if (row, col) == (1, 1) {
                    assert!(cell.is_mine());
                    assert_eq!(0, cell.adjacent_mine_count());
                } else {
                    assert!(!cell.is_mine());
                    assert_eq!(1, cell.adjacent_mine_count());
                }
            }
        }
    }

    #[test]
    // 1 2 3 2 3 M
    // 2 M M M 5 M
    // 3 M 8 M 6 M
    // 2 M M M 5 M
    // 1 2 3 2 4 M
    // 0 0 0 0 2 M
    fn get_value_general_test() {
        let mine_locations = layout(&[
            (0, 5),
            (1, 1),
            (1, 2),
            (1, 3),
            (1, 5),
            (2, 1),
            (2, 3),
            (2, 5),
            (3, 1),
            (3, 2),
            (3, 3),
            (3, 5),
            (4, 5),
            (5, 5),
        ]);
        let expected_values = vec![
            (0, 0, 1),
            (0, 1, 2),
            (0, 2, 3),
            (0, 3, 2),
            (0, 4, 3),
            (1, 0, 2),
            (1, 4, 5),
            (2, 0, 3),
            (2, 2, 8),
            (2, 4, 6),
            (3, 0, 2),
            (3, 4, 5),
            (4, 0, 1),
            (4, 1, 2),
            (4, 2, 3),
            (4, 3, 2),
            (4, 4, 4),
            (5, 0, 0),
            (5, 1, 0),
            (5, 2, 0),
            (5, 3, 0),
            (5, 4, 2),
        ];
        let board = Board::with_custom_mines(6, 6, mine_locations, Rules::faithful()).unwrap();
        for (row, col, expected_value) in expected_values.iter() {
            assert_eq!(
                *expected_value,
                board.cell(*row, *col).unwrap().adjacent_mine_count()
            );
        }
    }

    #[test]
    fn corner_neighbors_stay_inside() {
        let mut neighbors = get_neighbor_fields(4, 4, 0, 0);
        neighbors.sort();
        assert_eq!(vec![(0, 1), (1, 0), (1, 1)], neighbors);
        let neighbors = get_neighbor_fields(4, 4, 3, 3);
        assert_eq!(3, neighbors.len());
        assert!(neighbors.iter().all(|(r, c)| *r < 4 && *c < 4));
        assert_eq!(8, get_neighbor_fields(4, 4, 2, 2).len());
        assert_eq!(5, get_neighbor_fields(4, 4, 0, 2).len());
    }

    #[test]
    fn adjacency_matches_neighbor_scan() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::new(9, 13, 30, Rules::faithful(), &mut rng).unwrap();
        for row in 0..9 {
            for col in 0..13 {
                let expected = get_neighbor_fields(9, 13, row, col)
                    .iter()
                    .filter(|(r, c)| board.cell(*r, *c).unwrap().is_mine())
                    .count() as u8;
                assert_eq!(expected, board.cell(row, col).unwrap().adjacent_mine_count());
            }
        }
    }

    #[test]
    fn exact_mine_count_without_replacement() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = Board::new(5, 5, 24, Rules::faithful(), &mut rng).unwrap();
            assert_eq!(24, board.get_mine_locations().len());
            let mines = board.cells.iter().filter(|cell| cell.is_mine()).count();
            assert_eq!(24, mines);
        }
    }

    #[test]
    fn at_most_k_mines_with_replacement() {
        let rules = Rules::faithful().with_placement(MinePlacement::WithReplacement);
        let mut fewer_seen = false;
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = Board::new(3, 3, 9, rules, &mut rng).unwrap();
            let mines = board.cells.iter().filter(|cell| cell.is_mine()).count();
            assert!(mines <= 9);
            assert_eq!(mines, board.get_mine_locations().len());
            fewer_seen |= mines < 9;
        }
        // nine independent draws from nine cells practically never hit every cell
        assert!(fewer_seen);
    }

    #[test]
    fn full_and_empty_boards() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = Board::new(4, 4, 16, Rules::faithful(), &mut rng).unwrap();
        assert!(board.cells.iter().all(|cell| cell.is_mine()));
        let board = Board::new(4, 4, 0, Rules::faithful(), &mut rng).unwrap();
        assert!(board.cells.iter().all(|cell| !cell.is_mine()));
    }

    #[test]
    fn invalid_dimensions() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Some(MinefieldError::InvalidDimensions {
                height: 0,
                width: 5
            }),
            Board::new(0, 5, 1, Rules::faithful(), &mut rng).err()
        );
        assert!(Board::new(5, 0, 0, Rules::faithful(), &mut rng).is_err());
        assert!(
            Board::with_custom_mines(usize::MAX, 2, IndexSet::new(), Rules::faithful()).is_err()
        );
    }

    #[test]
    fn too_many_mines() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Some(MinefieldError::InvalidMineCount {
                number_of_mines: 10,
                number_of_fields: 9
            }),
            Board::new(3, 3, 10, Rules::faithful(), &mut rng).err()
        );
    }

    #[test]
    fn custom_mine_outside_board() {
        assert_eq!(
            Some(MinefieldError::OutOfBounds { row: 5, col: 0 }),
            Board::with_custom_mines(5, 6, layout(&[(5, 0)]), Rules::faithful()).err()
        );
    }

    #[test]
    fn press_out_of_bounds_does_not_mutate() {
        let mut board = create_board_5x6();
        let before = board.get_text_repr();
        assert_eq!(
            Err(MinefieldError::OutOfBounds { row: 5, col: 0 }),
            board.apply_press(5, 0, false)
        );
        assert_eq!(
            Err(MinefieldError::OutOfBounds { row: 0, col: 6 }),
            board.apply_press(0, 6, true)
        );
        assert_eq!(
            Err(MinefieldError::OutOfBounds { row: 9, col: 9 }),
            board.query_cell_view(9, 9)
        );
        assert_eq!(before, board.get_text_repr());
        assert!(board.cells.iter().all(|cell| !cell.is_targeted()));
    }

    #[test]
    fn views_after_presses() {
        let mut board = create_board_5x6();
        assert_eq!(Ok(PressResult::Revealed), board.apply_press(0, 0, false));
        assert_eq!(Ok(CellView::Numbered(0)), board.query_cell_view(0, 0));
        assert_eq!(Ok(PressResult::RevealedMine), board.apply_press(3, 3, false));
        assert_eq!(Ok(CellView::MineHit), board.query_cell_view(3, 3));
        assert_eq!(Ok(PressResult::Revealed), board.apply_press(3, 1, false));
        assert_eq!(Ok(CellView::Numbered(3)), board.query_cell_view(3, 1));
        assert_eq!(Ok(PressResult::Flagged), board.apply_press(4, 1, true));
        assert_eq!(Ok(CellView::Hidden), board.query_cell_view(4, 1));
        // single cell reveal, the empty neighbor stays hidden
        assert_eq!(Ok(CellView::Hidden), board.query_cell_view(0, 1));
    }

    #[test]
    fn playable_rules_show_flags() {
        let mine_locations = layout(&[(0, 3), (3, 0)]);
        let mut board = Board::with_custom_mines(5, 6, mine_locations, Rules::playable()).unwrap();
        assert_eq!(FlagDisplay::Always, board.get_rules().flag_display);
        assert_eq!(FlagGuard::Protected, board.get_rules().flag_guard);
        assert_eq!(Ok(PressResult::Flagged), board.apply_press(0, 3, true));
        assert_eq!(Ok(CellView::Flagged), board.query_cell_view(0, 3));
        assert_eq!(Ok(PressResult::IsFlagged), board.apply_press(0, 3, false));
        assert_eq!(Ok(CellView::Flagged), board.query_cell_view(0, 3));
    }

    #[test]
    fn text_repr() {
        let mut board = create_board_5x6();
        board.apply_press(0, 2, false).unwrap();
        board.apply_press(0, 3, false).unwrap();
        board.apply_press(0, 5, false).unwrap();
        let text = board.get_text_repr();
        let first_line = text.lines().next().unwrap();
        assert_eq!("OO1XO ", first_line);
        assert_eq!(5, text.lines().count());
    }
}
