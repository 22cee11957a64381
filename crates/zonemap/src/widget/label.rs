//! Multi-line label measurement and leader-line geometry.

use zonemap_render::{Point, Rect, Size, TextMeasurer, TextStyle};

use super::layout::Side;

/// One measured line of a label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLine {
    pub text: String,
    pub size: Size,
}

/// A label split on `\n` with every line measured.
///
/// Width is the widest line. Height is the sum of line heights plus
/// `line_spacing` between consecutive lines.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelBlock {
    lines: Vec<LabelLine>,
    line_spacing: f32,
    size: Size,
}

impl LabelBlock {
    /// Split and measure `text`.
    pub fn measure(
        text: &str,
        style: &TextStyle,
        measurer: &dyn TextMeasurer,
        line_spacing: f32,
    ) -> Self {
        let lines: Vec<LabelLine> = text
            .split('\n')
            .map(|line| LabelLine {
                text: line.to_owned(),
                size: measurer.measure(line, style),
            })
            .collect();

        let width = lines.iter().map(|l| l.size.width).fold(0.0, f32::max);
        let gaps = lines.len().saturating_sub(1) as f32;
        let height = lines.iter().map(|l| l.size.height).sum::<f32>() + line_spacing * gaps;

        Self {
            lines,
            line_spacing,
            size: Size::new(width, height),
        }
    }

    pub fn lines(&self) -> &[LabelLine] {
        &self.lines
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Where a label block lands on screen.
    ///
    /// Left labels start at `x = 0`; right labels end at `view_width` with
    /// each line right-aligned. The block is vertically centered on
    /// `center_y`. The leader line starts `text_margin` away from the block
    /// on the side facing the map.
    pub fn place(
        &self,
        side: Side,
        center_y: f32,
        view_width: f32,
        text_margin: f32,
    ) -> LabelPlacement {
        let top = center_y - self.size.height / 2.0;
        let (left, leader_x) = match side {
            Side::Left => (0.0, self.size.width + text_margin),
            Side::Right => (
                view_width - self.size.width,
                view_width - self.size.width - text_margin,
            ),
        };

        let mut line_origins = Vec::with_capacity(self.lines.len());
        let mut y = top;
        for line in &self.lines {
            let x = match side {
                Side::Left => 0.0,
                Side::Right => view_width - line.size.width,
            };
            line_origins.push(Point::new(x, y));
            y += line.size.height + self.line_spacing;
        }

        LabelPlacement {
            rect: Rect::new(left, top, self.size.width, self.size.height),
            line_origins,
            leader_start: Point::new(leader_x, center_y),
        }
    }
}

/// Screen geometry of one placed label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    /// Bounding box of the text block.
    pub rect: Rect,
    /// Top-left origin of each line, in line order.
    pub line_origins: Vec<Point>,
    /// Where the leader line leaves the label.
    pub leader_start: Point,
}

/// Where a leader line meets an icon.
///
/// `anchor` is a fraction of the icon's bounds; the icon is centered on
/// `location`, so `(0.5, 0.5)` lands on `location` itself.
pub fn leader_end(location: Point, anchor: Point, icon_size: Size) -> Point {
    let icon = icon_size.to_vec2();
    Point::from_vec2(location.to_vec2() + anchor.to_vec2() * icon - icon / 2.0)
}
