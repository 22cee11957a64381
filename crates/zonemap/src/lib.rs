//! Zonemap: annotated image map widgets.
//!
//! A [`NoteImageView`] draws a background bitmap, one pin per item, and a
//! label for every item stacked along the left or right edge of the view.
//! Each label is joined to its item's icon by a leader line, and pressing a
//! label selects the item.
//!
//! Drawing goes through the [`Renderer`](render::Renderer) trait and text
//! measurement through [`TextMeasurer`](render::TextMeasurer), so views can
//! be painted headlessly with a [`RecordingRenderer`](render::RecordingRenderer).
//!
//! # Example
//!
//! ```ignore
//! use zonemap::prelude::*;
//!
//! let handler = UiHandler::new();
//! let mut view = NoteImageView::new(handler.clone());
//! view.resize(Size::new(480.0, 800.0));
//! view.set_adapter(Arc::new(my_adapter));
//! handler.process_all();
//! ```

pub mod config;
pub mod error;
pub mod prelude;
pub mod widget;

pub use config::NoteImageConfig;
pub use error::{Result, ZonemapError};
pub use widget::{ImageMapView, MapAdapter, NoteImageAdapter, NoteImageView};
pub use zonemap_core::*;

/// Graphics primitives.
pub mod render {
    pub use zonemap_render::*;
}
