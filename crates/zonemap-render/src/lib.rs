//! Drawing primitives for Zonemap.
//!
//! This crate holds everything a map widget needs to describe a frame
//! without committing to a backend:
//!
//! - geometry ([`Point`], [`Size`], [`Rect`], [`IntRect`]) and [`Color`]
//! - [`Stroke`] styles for leader lines
//! - [`Bitmap`] for backgrounds and item icons
//! - [`TextStyle`] and the [`TextMeasurer`] seam
//! - the object-safe [`Renderer`] trait and a [`RecordingRenderer`]
//!
//! # Example
//!
//! ```
//! use zonemap_render::{Color, Point, RecordingRenderer, Renderer, Size, Stroke};
//!
//! let mut renderer = RecordingRenderer::new();
//! renderer.begin_frame(Color::TRANSPARENT, Size::new(320.0, 480.0));
//! let stroke = Stroke::new(Color::RED, 2.0);
//! renderer.draw_line(Point::new(0.0, 0.0), Point::new(50.0, 80.0), &stroke);
//! let stats = renderer.end_frame();
//! assert_eq!(stats.lines, 1);
//! ```

mod bitmap;
mod error;
mod paint;
mod recording;
mod renderer;
mod text;
mod types;

pub use bitmap::Bitmap;
pub use error::{RenderError, RenderResult};
pub use paint::Stroke;
pub use recording::{DrawCommand, RecordingRenderer};
pub use renderer::{FrameStats, Renderer};
pub use text::{FixedAdvanceMeasurer, TextMeasurer, TextStyle};
pub use types::{Color, IntRect, Point, Rect, Size};
