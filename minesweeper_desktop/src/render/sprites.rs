use super::canvas::Color;
use minesweeper::CellView;
use strum_macros::Display;

#[derive(Clone, Copy, Eq, PartialEq, Hash, Display, Debug)]
pub enum SpriteKind {
    Hidden,
    Flag,
    Mine,
    Number(u8),
}

impl SpriteKind {
    fn index(&self) -> usize {
        match self {
            SpriteKind::Hidden => 0,
            SpriteKind::Flag => 1,
            SpriteKind::Mine => 2,
            SpriteKind::Number(value) => 3 + usize::from((*value).min(8)),
        }
    }
}

impl From<CellView> for SpriteKind {
    fn from(view: CellView) -> Self {
        match view {
            CellView::Hidden => SpriteKind::Hidden,
            CellView::Flagged => SpriteKind::Flag,
            CellView::Numbered(value) => SpriteKind::Number(value),
            CellView::MineHit => SpriteKind::Mine,
        }
    }
}

const NUMBER_OF_SPRITES: usize = 12;

const HIDDEN_COLOR: Color = Color::rgb(120, 120, 120);
const BEVEL_LIGHT: Color = Color::rgb(170, 170, 170);
const BEVEL_DARK: Color = Color::rgb(70, 70, 70);
const REVEALED_COLOR: Color = Color::rgb(200, 200, 200);
const MINE_HIT_COLOR: Color = Color::rgb(230, 40, 40);
const BLACK: Color = Color::rgb(0, 0, 0);
const FLAG_COLOR: Color = Color::rgb(220, 0, 0);

const NUMBER_COLORS: [Color; 8] = [
    Color::rgb(0, 0, 255),
    Color::rgb(0, 128, 0),
    Color::rgb(255, 0, 0),
    Color::rgb(0, 0, 128),
    Color::rgb(128, 0, 0),
    Color::rgb(0, 128, 128),
    Color::rgb(0, 0, 0),
    Color::rgb(128, 128, 128),
];

// 3x5 glyphs of the digits 1 to 8, one row per entry, highest bit left
const DIGIT_GLYPHS: [[u8; 5]; 8] = [
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b001, 0b001],
    [0b111, 0b101, 0b111, 0b101, 0b111],
];

/// Square `size x size` image in `0RGB` pixels.
#[derive(Clone, Debug)]
pub struct Tile {
    size: u32,
    pixels: Vec<u32>,
}

impl Tile {
    fn new(size: u32, background: Color) -> Tile {
        Tile {
            size,
            pixels: vec![background.to_pixel(); (size * size) as usize],
        }
    }

    pub fn get_size(&self) -> u32 {
        self.size
    }

    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        self.pixels[(y * self.size + x) as usize]
    }

    fn put(&mut self, x: i64, y: i64, color: Color) {
        let size = i64::from(self.size);
        if x >= 0 && y >= 0 && x < size && y < size {
            self.pixels[(y * size + x) as usize] = color.to_pixel();
        }
    }

    fn fill(&mut self, x: i64, y: i64, w: i64, h: i64, color: Color) {
        for py in y..y + h {
            for px in x..x + w {
                self.put(px, py, color);
            }
        }
    }

    fn bevel(&mut self) {
        let size = i64::from(self.size);
        let width = (size / 10).max(1);
        self.fill(0, 0, size, width, BEVEL_LIGHT);
        self.fill(0, 0, width, size, BEVEL_LIGHT);
        self.fill(0, size - width, size, width, BEVEL_DARK);
        self.fill(size - width, 0, width, size, BEVEL_DARK);
    }

    fn disc(&mut self, radius: i64, color: Color) {
        let center = i64::from(self.size) / 2;
        for y in -radius..=radius {
            for x in -radius..=radius {
                if x * x + y * y <= radius * radius {
                    self.put(center + x, center + y, color);
                }
            }
        }
    }

    fn digit(&mut self, value: u8) {
        if value == 0 || value > 8 {
            return;
        }
        let glyph = &DIGIT_GLYPHS[usize::from(value - 1)];
        let color = NUMBER_COLORS[usize::from(value - 1)];
        let size = i64::from(self.size);
        let scale = (size / 8).max(1);
        let left = (size - 3 * scale) / 2;
        let top = (size - 5 * scale) / 2;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..3 {
                if bits & (0b100 >> col) != 0 {
                    self.fill(
                        left + col * scale,
                        top + row as i64 * scale,
                        scale,
                        scale,
                        color,
                    );
                }
            }
        }
    }

    fn flag(&mut self) {
        let size = i64::from(self.size);
        let pole_x = size / 2 + size / 10;
        let top = size / 5;
        let bottom = size - size / 5;
        self.fill(pole_x, top, (size / 20).max(1), bottom - top, BLACK);
        self.fill(size / 4, bottom - (size / 20).max(1), size / 2, (size / 20).max(1), BLACK);
        // triangle pointing left from the pole
        let height = size / 3;
        for dy in 0..height {
            let reach = (height / 2 - (dy - height / 2).abs()) * 2;
            self.fill(pole_x - reach, top + dy, reach, 1, FLAG_COLOR);
        }
    }
}

/// Pre-rendered tiles of every `SpriteKind` at a fixed cell size.
#[derive(Clone, Debug)]
pub struct SpriteSheet {
    tiles: Vec<Tile>,
}

impl SpriteSheet {
    pub fn generate(size: u32) -> SpriteSheet {
        let mut tiles = Vec::with_capacity(NUMBER_OF_SPRITES);

        let mut hidden = Tile::new(size, HIDDEN_COLOR);
        hidden.bevel();
        tiles.push(hidden.clone());

        let mut flag = hidden;
        flag.flag();
        tiles.push(flag);

        let mut mine = Tile::new(size, MINE_HIT_COLOR);
        mine.disc(i64::from(size) / 4, BLACK);
        tiles.push(mine);

        for value in 0..=8 {
            let mut number = Tile::new(size, REVEALED_COLOR);
            number.digit(value);
            tiles.push(number);
        }

        SpriteSheet { tiles }
    }

    pub fn get(&self, kind: SpriteKind) -> &Tile {
        &self.tiles[kind.index()]
    }

    pub fn get_size(&self) -> u32 {
        self.tiles[0].get_size()
    }
}
