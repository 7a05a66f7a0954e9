//! Everything that turns the game state into pixels.

mod canvas;
mod frame;
mod palette;
mod pixel_canvas;
mod sprites;

#[cfg(test)]
pub use canvas::MockCanvas;
pub use canvas::{Canvas, Color, Rect};
pub use frame::{FrameRenderer, RenderMode};
pub use palette::Palette;
pub use pixel_canvas::PixelCanvas;
pub use sprites::{SpriteKind, SpriteSheet, Tile};
