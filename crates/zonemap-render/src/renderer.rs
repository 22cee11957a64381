//! Core renderer trait defining the 2D drawing interface.
//!
//! [`Renderer`] is the seam between widgets and a drawing backend. It is
//! object safe so widgets can paint through `&mut dyn Renderer`.
//!
//! # Frame Lifecycle
//!
//! ```ignore
//! renderer.begin_frame(Color::TRANSPARENT, Size::new(480.0, 800.0));
//! renderer.draw_image(&background, dest);
//! renderer.draw_line(from, to, &stroke);
//! let stats = renderer.end_frame();
//! ```

use crate::bitmap::Bitmap;
use crate::paint::Stroke;
use crate::text::TextStyle;
use crate::types::{Color, Point, Rect, Size};

/// Statistics from a frame render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Number of draw calls submitted.
    pub draw_calls: u32,
    /// Number of images drawn.
    pub images: u32,
    /// Number of text runs drawn.
    pub text_runs: u32,
    /// Number of lines drawn.
    pub lines: u32,
}

/// The core 2D rendering trait.
pub trait Renderer {
    /// Begin a new frame, clearing the target to `clear_color`.
    fn begin_frame(&mut self, clear_color: Color, viewport_size: Size);

    /// End the current frame and return its statistics.
    fn end_frame(&mut self) -> FrameStats;

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a bitmap stretched into `dest`.
    fn draw_image(&mut self, bitmap: &Bitmap, dest: Rect);

    /// Draw a single line of text with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);

    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);
}
