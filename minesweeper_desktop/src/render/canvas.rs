use super::sprites::SpriteKind;
#[cfg(test)]
use mockall::automock;

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Packs the color as `0RGB`, the layout of the window buffer.
    pub fn to_pixel(&self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    pub fn from_pixel(pixel: u32) -> Color {
        Color::rgb((pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8)
    }

    /// Source over blending onto an opaque pixel.
    pub fn blend_over(&self, pixel: u32) -> u32 {
        if self.is_opaque() {
            return self.to_pixel();
        }
        let below = Color::from_pixel(pixel);
        let alpha = u32::from(self.a);
        let mix = |top: u8, bottom: u8| -> u8 {
            ((u32::from(top) * alpha + u32::from(bottom) * (255 - alpha)) / 255) as u8
        };
        Color::rgb(
            mix(self.r, below.r),
            mix(self.g, below.g),
            mix(self.b, below.b),
        )
        .to_pixel()
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Rect {
        Rect { x, y, w, h }
    }
}

/// The draw calls a frame is painted with.
#[cfg_attr(test, automock)]
pub trait Canvas {
    fn set_draw_color(&mut self, color: Color);

    /// Fills the whole canvas with the draw color.
    fn clear(&mut self);

    /// Line between two pixels, both ends included.
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);

    fn fill_rect(&mut self, rect: Rect);

    fn draw_rect(&mut self, rect: Rect);

    fn blit(&mut self, sprite: SpriteKind, dest: Rect);
}
