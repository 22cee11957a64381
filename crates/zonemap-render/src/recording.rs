//! A renderer that records draw calls instead of rasterizing them.
//!
//! [`RecordingRenderer`] keeps the command list of the last frame. Hosts use
//! it for headless rendering (to replay into another backend) and tests use
//! it to assert what a widget drew.

use crate::bitmap::Bitmap;
use crate::paint::Stroke;
use crate::renderer::{FrameStats, Renderer};
use crate::text::TextStyle;
use crate::types::{Color, Point, Rect, Size};

const RECORDING_TARGET: &str = "zonemap_render::recording";

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// The frame was cleared.
    Clear { color: Color, viewport: Size },
    /// A solid rectangle.
    FillRect { rect: Rect, color: Color },
    /// A bitmap drawn into a destination rectangle.
    Image { bitmap: Bitmap, dest: Rect },
    /// One line of text.
    Text {
        text: String,
        origin: Point,
        style: TextStyle,
    },
    /// A straight line.
    Line { from: Point, to: Point, stroke: Stroke },
}

/// Records every command issued between `begin_frame` and `end_frame`.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
    stats: FrameStats,
    in_frame: bool,
    frames: u64,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the current (or most recently finished) frame.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the list empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of frames finished so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Whether a frame is open.
    pub fn is_in_frame(&self) -> bool {
        self.in_frame
    }

    /// All recorded lines as `(from, to)` pairs, in draw order.
    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// All recorded text runs as `(text, origin)` pairs, in draw order.
    pub fn texts(&self) -> Vec<(&str, Point)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, origin, .. } => Some((text.as_str(), *origin)),
                _ => None,
            })
            .collect()
    }

    /// All recorded images as `(bitmap, dest)` pairs, in draw order.
    pub fn images(&self) -> Vec<(&Bitmap, Rect)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Image { bitmap, dest } => Some((bitmap, *dest)),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, command: DrawCommand) {
        if !self.in_frame {
            tracing::warn!(target: RECORDING_TARGET, "draw call outside of a frame");
        }
        self.stats.draw_calls += 1;
        match &command {
            DrawCommand::Image { .. } => self.stats.images += 1,
            DrawCommand::Text { .. } => self.stats.text_runs += 1,
            DrawCommand::Line { .. } => self.stats.lines += 1,
            DrawCommand::Clear { .. } | DrawCommand::FillRect { .. } => {}
        }
        self.commands.push(command);
    }
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self, clear_color: Color, viewport_size: Size) {
        self.commands.clear();
        self.stats = FrameStats::default();
        self.in_frame = true;
        self.commands.push(DrawCommand::Clear {
            color: clear_color,
            viewport: viewport_size,
        });
    }

    fn end_frame(&mut self) -> FrameStats {
        self.in_frame = false;
        self.frames += 1;
        self.stats
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.record(DrawCommand::FillRect { rect, color });
    }

    fn draw_image(&mut self, bitmap: &Bitmap, dest: Rect) {
        self.record(DrawCommand::Image {
            bitmap: bitmap.clone(),
            dest,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.record(DrawCommand::Text {
            text: text.to_owned(),
            origin,
            style: style.clone(),
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.record(DrawCommand::Line {
            from,
            to,
            stroke: *stroke,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_frame() {
        let mut renderer = RecordingRenderer::new();
        renderer.begin_frame(Color::TRANSPARENT, Size::new(100.0, 50.0));
        renderer.draw_line(Point::ZERO, Point::new(10.0, 10.0), &Stroke::default());
        renderer.draw_text("Foo", Point::new(1.0, 2.0), &TextStyle::default());
        let stats = renderer.end_frame();

        assert_eq!(stats.draw_calls, 2);
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.text_runs, 1);
        assert_eq!(renderer.frame_count(), 1);
        assert!(matches!(renderer.commands()[0], DrawCommand::Clear { .. }));
        assert_eq!(renderer.lines(), vec![(Point::ZERO, Point::new(10.0, 10.0))]);
        assert_eq!(renderer.texts(), vec![("Foo", Point::new(1.0, 2.0))]);
    }

    #[test]
    fn test_begin_frame_discards_previous_commands() {
        let mut renderer = RecordingRenderer::new();
        renderer.begin_frame(Color::WHITE, Size::new(10.0, 10.0));
        renderer.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0), Color::RED);
        renderer.end_frame();

        renderer.begin_frame(Color::WHITE, Size::new(10.0, 10.0));
        assert_eq!(renderer.commands().len(), 1);
        assert!(renderer.is_in_frame());
    }

    #[test]
    fn test_draw_outside_frame_still_recorded() {
        let mut renderer = RecordingRenderer::new();
        renderer.draw_line(Point::ZERO, Point::new(3.0, 4.0), &Stroke::default());

        assert!(!renderer.is_in_frame());
        assert_eq!(renderer.lines(), vec![(Point::ZERO, Point::new(3.0, 4.0))]);
    }
}
