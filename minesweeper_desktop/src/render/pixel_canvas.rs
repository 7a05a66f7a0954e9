use super::canvas::{Canvas, Color, Rect};
use super::sprites::{SpriteKind, SpriteSheet};

/// Software framebuffer the window presents every frame.
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    draw_color: Color,
    sprites: SpriteSheet,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32, sprites: SpriteSheet) -> PixelCanvas {
        PixelCanvas {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
            draw_color: Color::rgb(0, 0, 0),
            sprites,
        }
    }

    pub fn get_width(&self) -> u32 {
        self.width
    }

    pub fn get_height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Copies the overlapping part into a buffer of another size and fills the
    /// rest of it with `background`.
    pub fn copy_to(&self, target: &mut [u32], target_width: u32, target_height: u32, background: Color) {
        if target.len() < (target_width * target_height) as usize {
            return;
        }
        let background = background.to_pixel();
        for y in 0..target_height {
            let row = &mut target[(y * target_width) as usize..((y + 1) * target_width) as usize];
            if y < self.height {
                let copied = self.width.min(target_width) as usize;
                let start = (y * self.width) as usize;
                row[..copied].copy_from_slice(&self.pixels[start..start + copied]);
                for pixel in row[copied..].iter_mut() {
                    *pixel = background;
                }
            } else {
                for pixel in row.iter_mut() {
                    *pixel = background;
                }
            }
        }
    }

    fn plot(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.pixels[index] = color.blend_over(self.pixels[index]);
        }
    }

    fn clip(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let left = rect.x.max(0) as i64;
        let top = rect.y.max(0) as i64;
        let right = (i64::from(rect.x) + i64::from(rect.w)).min(i64::from(self.width));
        let bottom = (i64::from(rect.y) + i64::from(rect.h)).min(i64::from(self.height));
        if left >= right || top >= bottom {
            None
        } else {
            Some((left as u32, top as u32, right as u32, bottom as u32))
        }
    }
}

impl Canvas for PixelCanvas {
    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    fn clear(&mut self) {
        let pixel = self.draw_color.to_pixel();
        for value in self.pixels.iter_mut() {
            *value = pixel;
        }
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let color = self.draw_color;
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let step_x = if x1 < x2 { 1 } else { -1 };
        let step_y = if y1 < y2 { 1 } else { -1 };
        let (mut x, mut y) = (x1, y1);
        let mut error = dx + dy;
        loop {
            self.plot(x, y, color);
            if x == x2 && y == y2 {
                break;
            }
            let doubled = 2 * error;
            if doubled >= dy {
                error += dy;
                x += step_x;
            }
            if doubled <= dx {
                error += dx;
                y += step_y;
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect) {
        let color = self.draw_color;
        if let Some((left, top, right, bottom)) = self.clip(rect) {
            for y in top..bottom {
                for x in left..right {
                    self.plot(x as i32, y as i32, color);
                }
            }
        }
    }

    fn draw_rect(&mut self, rect: Rect) {
        if rect.w == 0 || rect.h == 0 {
            return;
        }
        let right = rect.x + rect.w as i32 - 1;
        let bottom = rect.y + rect.h as i32 - 1;
        self.draw_line(rect.x, rect.y, right, rect.y);
        self.draw_line(rect.x, bottom, right, bottom);
        self.draw_line(rect.x, rect.y, rect.x, bottom);
        self.draw_line(right, rect.y, right, bottom);
    }

    fn blit(&mut self, sprite: SpriteKind, dest: Rect) {
        let clipped = match self.clip(dest) {
            Some(clipped) => clipped,
            None => return,
        };
        let (left, top, right, bottom) = clipped;
        let tile = self.sprites.get(sprite);
        let size = tile.get_size();
        for y in top..bottom {
            // nearest neighbour when the destination is not the tile size
            let ty = ((i64::from(y) - i64::from(dest.y)) * i64::from(size) / i64::from(dest.h)) as u32;
            for x in left..right {
                let tx = ((i64::from(x) - i64::from(dest.x)) * i64::from(size) / i64::from(dest.w)) as u32;
                self.pixels[(y * self.width + x) as usize] = tile.pixel(tx, ty);
            }
        }
    }
}
