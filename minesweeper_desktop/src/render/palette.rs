use super::canvas::Color;

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Palette {
    pub background: Color,
    pub line: Color,
    pub ghost: Color,
    pub clicked: Color,
    /// Ghost highlight painted over sprites.
    pub ghost_overlay: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            // barely black
            background: Color::rgb(22, 22, 22),
            // dark grey
            line: Color::rgb(44, 44, 44),
            ghost: Color::rgb(44, 44, 44),
            // green
            clicked: Color::rgb(28, 200, 121),
            ghost_overlay: Color::rgba(255, 255, 255, 64),
        }
    }
}
