use super::canvas::{Canvas, Rect};
use super::palette::Palette;
use super::sprites::SpriteKind;
use minesweeper::input::InputState;
use minesweeper::{Minefield, SizeType};
use strum_macros::Display;

/// The three stages the game grew through, each still runnable.
#[derive(Clone, Copy, Eq, PartialEq, Display, Debug)]
pub enum RenderMode {
    /// Background and grid lines only.
    Grid,
    /// Flat green cells for everything clicked, plus the ghost cursor.
    Cursor,
    /// Full game with sprites.
    Sprites,
}

pub struct FrameRenderer {
    mode: RenderMode,
    palette: Palette,
    cell_size: u32,
}

impl FrameRenderer {
    pub fn new(mode: RenderMode, palette: Palette, cell_size: u32) -> FrameRenderer {
        FrameRenderer {
            mode,
            palette,
            cell_size,
        }
    }

    pub fn get_mode(&self) -> RenderMode {
        self.mode
    }

    pub fn get_palette(&self) -> &Palette {
        &self.palette
    }

    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C, minefield: &Minefield, input: &InputState) {
        canvas.set_draw_color(self.palette.background);
        canvas.clear();

        match self.mode {
            RenderMode::Grid => self.draw_grid(canvas, minefield),
            RenderMode::Cursor => {
                self.draw_grid(canvas, minefield);
                self.draw_clicked_cells(canvas, minefield);
                if input.ghost_visible() {
                    if let Some(ghost) = input.get_ghost() {
                        canvas.set_draw_color(self.palette.ghost);
                        canvas.fill_rect(self.cell_rect(ghost.row, ghost.col));
                    }
                }
                // the last clicked cell is drawn over the ghost
                if let Some(cursor) = input.get_cursor() {
                    canvas.set_draw_color(self.palette.clicked);
                    canvas.fill_rect(self.cell_rect(cursor.row, cursor.col));
                }
            }
            RenderMode::Sprites => {
                self.draw_sprites(canvas, minefield);
                self.draw_grid(canvas, minefield);
                if input.ghost_visible() {
                    if let Some(ghost) = input.get_ghost() {
                        let hidden = minefield
                            .query_cell_view(ghost.row, ghost.col)
                            .map_or(false, |view| view.is_hidden());
                        if hidden {
                            canvas.set_draw_color(self.palette.ghost_overlay);
                            canvas.fill_rect(self.cell_rect(ghost.row, ghost.col));
                        }
                    }
                }
                if let Some(cursor) = input.get_cursor() {
                    canvas.set_draw_color(self.palette.clicked);
                    canvas.draw_rect(self.cell_rect(cursor.row, cursor.col));
                }
            }
        }
    }

    fn cell_rect(&self, row: SizeType, col: SizeType) -> Rect {
        let size = self.cell_size as i32;
        Rect::new(col as i32 * size, row as i32 * size, self.cell_size, self.cell_size)
    }

    fn draw_grid<C: Canvas + ?Sized>(&self, canvas: &mut C, minefield: &Minefield) {
        let size = self.cell_size as i32;
        let right = minefield.get_width() as i32 * size;
        let bottom = minefield.get_height() as i32 * size;
        canvas.set_draw_color(self.palette.line);
        for col in 0..=minefield.get_width() as i32 {
            canvas.draw_line(col * size, 0, col * size, bottom);
        }
        for row in 0..=minefield.get_height() as i32 {
            canvas.draw_line(0, row * size, right, row * size);
        }
    }

    fn draw_clicked_cells<C: Canvas + ?Sized>(&self, canvas: &mut C, minefield: &Minefield) {
        canvas.set_draw_color(self.palette.clicked);
        for row in 0..minefield.get_height() {
            for col in 0..minefield.get_width() {
                if let Ok(true) = minefield.is_targeted(row, col) {
                    canvas.fill_rect(self.cell_rect(row, col));
                }
            }
        }
    }

    fn draw_sprites<C: Canvas + ?Sized>(&self, canvas: &mut C, minefield: &Minefield) {
        for row in 0..minefield.get_height() {
            for col in 0..minefield.get_width() {
                if let Ok(view) = minefield.query_cell_view(row, col) {
                    canvas.blit(SpriteKind::from(view), self.cell_rect(row, col));
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::render::{MockCanvas, PixelCanvas, SpriteSheet};
    use minesweeper::input::{InputAdapter, InputEvent};
    use minesweeper::session::Session;
    use minesweeper::Rules;
    use mockall::predicate::eq;
    use std::num::NonZeroU32;

    const CELL_SIZE: u32 = 10;

    // 3 rows, 4 columns, mine at (1, 1)
    fn create_session(rules: Rules) -> Session {
        let minefield = Minefield::with_mines(4, 3, &[(1, 1)], rules).unwrap();
        Session::new(
            minefield,
            InputAdapter::new(NonZeroU32::new(CELL_SIZE).unwrap(), 4, 3),
        )
    }

    fn renderer(mode: RenderMode) -> FrameRenderer {
        FrameRenderer::new(mode, Palette::default(), CELL_SIZE)
    }

    #[test]
    fn grid_mode_draws_lines_only() {
        let session = create_session(Rules::faithful());
        let palette = Palette::default();
        let mut canvas = MockCanvas::new();
        canvas
            .expect_set_draw_color()
            .with(eq(palette.background))
            .times(1)
            .return_const(());
        canvas
            .expect_set_draw_color()
            .with(eq(palette.line))
            .times(1)
            .return_const(());
        canvas.expect_clear().times(1).return_const(());
        // five vertical and four horizontal lines
        canvas
            .expect_draw_line()
            .with(eq(40), eq(0), eq(40), eq(30))
            .times(1)
            .return_const(());
        canvas
            .expect_draw_line()
            .with(eq(0), eq(30), eq(40), eq(30))
            .times(1)
            .return_const(());
        canvas
            .expect_draw_line()
            .withf(|x1, y1, x2, y2| {
                let line = (*x1, *y1, *x2, *y2);
                line != (40, 0, 40, 30) && line != (0, 30, 40, 30)
            })
            .times(7)
            .return_const(());
        canvas.expect_fill_rect().times(0).return_const(());
        canvas.expect_blit().times(0).return_const(());
        renderer(RenderMode::Grid).render(&mut canvas, session.get_minefield(), session.get_input());
    }

    #[test]
    fn cursor_mode_fills_clicked_cells() {
        let mut session = create_session(Rules::faithful());
        session.step(vec![
            InputEvent::left_click(5, 5),
            InputEvent::right_click(15, 25),
            InputEvent::WindowEnter,
            InputEvent::PointerMove { x: 35, y: 5 },
        ]);
        let mut canvas = MockCanvas::new();
        canvas.expect_set_draw_color().return_const(());
        canvas.expect_clear().times(1).return_const(());
        canvas.expect_draw_line().times(9).return_const(());
        canvas
            .expect_fill_rect()
            .with(eq(Rect::new(0, 0, 10, 10)))
            .times(1)
            .return_const(());
        // clicked cell and cursor
        canvas
            .expect_fill_rect()
            .with(eq(Rect::new(10, 20, 10, 10)))
            .times(2)
            .return_const(());
        // ghost
        canvas
            .expect_fill_rect()
            .with(eq(Rect::new(30, 0, 10, 10)))
            .times(1)
            .return_const(());
        canvas.expect_blit().times(0).return_const(());
        renderer(RenderMode::Cursor).render(&mut canvas, session.get_minefield(), session.get_input());
    }

    #[test]
    fn sprites_mode_blits_every_cell() {
        let mut session = create_session(Rules::playable());
        session.step(vec![InputEvent::left_click(5, 5), InputEvent::right_click(15, 15)]);
        let mut canvas = MockCanvas::new();
        canvas.expect_set_draw_color().return_const(());
        canvas.expect_clear().times(1).return_const(());
        canvas.expect_draw_line().times(9).return_const(());
        canvas
            .expect_blit()
            .with(eq(SpriteKind::Number(1)), eq(Rect::new(0, 0, 10, 10)))
            .times(1)
            .return_const(());
        canvas
            .expect_blit()
            .with(eq(SpriteKind::Flag), eq(Rect::new(10, 10, 10, 10)))
            .times(1)
            .return_const(());
        canvas
            .expect_blit()
            .with(eq(SpriteKind::Hidden), mockall::predicate::always())
            .times(10)
            .return_const(());
        // the ghost never became visible
        canvas.expect_fill_rect().times(0).return_const(());
        canvas
            .expect_draw_rect()
            .with(eq(Rect::new(10, 10, 10, 10)))
            .times(1)
            .return_const(());
        renderer(RenderMode::Sprites).render(&mut canvas, session.get_minefield(), session.get_input());
    }

    #[test]
    fn sprites_mode_ghost_only_over_hidden_cells() {
        let mut session = create_session(Rules::playable());
        session.step(vec![
            InputEvent::left_click(5, 5),
            InputEvent::WindowEnter,
            InputEvent::PointerMove { x: 5, y: 5 },
        ]);
        let mut canvas = PixelCanvas::new(41, 31, SpriteSheet::generate(CELL_SIZE));
        let palette = Palette::default();
        renderer(RenderMode::Sprites).render(&mut canvas, session.get_minefield(), session.get_input());
        let revealed = canvas.pixel(5, 5);

        session.step(vec![InputEvent::PointerMove { x: 25, y: 5 }]);
        renderer(RenderMode::Sprites).render(&mut canvas, session.get_minefield(), session.get_input());
        // the revealed cell looks the same without the ghost on it
        assert_eq!(revealed, canvas.pixel(5, 5));
        let sheet = SpriteSheet::generate(CELL_SIZE);
        let hidden = sheet.get(SpriteKind::Hidden).pixel(5, 5);
        assert_eq!(Some(palette.ghost_overlay.blend_over(hidden)), canvas.pixel(25, 5));
        assert_eq!(Some(hidden), canvas.pixel(35, 5));
    }

    #[test]
    fn cursor_covers_ghost_on_pixels() {
        let mut session = create_session(Rules::faithful());
        session.step(vec![
            InputEvent::WindowEnter,
            InputEvent::PointerMove { x: 15, y: 15 },
            InputEvent::left_click(15, 15),
        ]);
        let mut canvas = PixelCanvas::new(41, 31, SpriteSheet::generate(CELL_SIZE));
        let palette = Palette::default();
        renderer(RenderMode::Cursor).render(&mut canvas, session.get_minefield(), session.get_input());
        assert_eq!(Some(palette.clicked.to_pixel()), canvas.pixel(15, 15));
        assert_eq!(Some(palette.background.to_pixel()), canvas.pixel(25, 25));
        assert_eq!(Some(palette.line.to_pixel()), canvas.pixel(40, 30));
        assert_eq!(Some(palette.line.to_pixel()), canvas.pixel(20, 7));
    }
}
