//! Stroke styles for leader lines.

use crate::types::Color;

/// Color and width of a stroked line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    /// Width in pixels.
    pub width: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

impl Stroke {
    /// Create a new stroke with the given color and width.
    #[inline]
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stroke_is_hairline_black() {
        let stroke = Stroke::default();
        assert_eq!(stroke.color, Color::BLACK);
        assert_eq!(stroke.width, 1.0);
        assert_eq!(Stroke::new(Color::BLACK, 1.0), stroke);
    }
}
