//! Text styles and measurement.
//!
//! Drawing text is the renderer's job; measuring it is the job of a
//! [`TextMeasurer`]. Keeping the two apart lets layout run without a
//! rendering backend.

use unicode_segmentation::UnicodeSegmentation;

use crate::types::{Color, Size};

/// How a label's text is styled.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size: f32,
    /// Text color.
    pub color: Color,
    /// Extra spacing between graphemes, in pixels.
    pub letter_spacing: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 14.0,
            color: Color::BLACK,
            letter_spacing: 0.0,
        }
    }
}

impl TextStyle {
    /// Create a style with the given size and color.
    pub fn new(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            ..Default::default()
        }
    }

    /// Set the letter spacing (builder pattern).
    pub fn with_letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = spacing;
        self
    }
}

/// Measures single lines of text.
///
/// Implementations must return `Size::ZERO` for an empty string.
pub trait TextMeasurer {
    /// Measure one line of text (no line breaks) in the given style.
    fn measure(&self, text: &str, style: &TextStyle) -> Size;
}

/// A measurer that gives every grapheme the same advance.
///
/// Width is `graphemes * advance_ratio * size` plus letter spacing between
/// graphemes; height is `size * line_height`. Deterministic, which makes it
/// the measurer of choice for headless rendering and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMeasurer {
    /// Advance of one grapheme as a fraction of the font size.
    pub advance_ratio: f32,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.5,
            line_height: 1.0,
        }
    }
}

impl FixedAdvanceMeasurer {
    pub fn new(advance_ratio: f32, line_height: f32) -> Self {
        Self {
            advance_ratio,
            line_height,
        }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> Size {
        let graphemes = text.graphemes(true).count();
        if graphemes == 0 {
            return Size::ZERO;
        }
        let spacing = style.letter_spacing * (graphemes - 1) as f32;
        Size::new(
            graphemes as f32 * self.advance_ratio * style.size + spacing,
            style.size * self.line_height,
        )
    }
}
