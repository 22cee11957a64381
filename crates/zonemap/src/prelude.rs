//! Prelude module for Zonemap.
//!
//! ```ignore
//! use zonemap::prelude::*;
//! ```

pub use std::sync::Arc;

// ============================================================================
// Core
// ============================================================================

pub use crate::{ConnectionId, Signal, UiHandler};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::{
    ImageMapView, MapAdapter, MouseButton, MousePressEvent, NoteImageAdapter, NoteImageView,
    PaintContext, TouchEvent, TouchPhase, Widget, WidgetEvent,
};

// ============================================================================
// Configuration and errors
// ============================================================================

pub use crate::config::NoteImageConfig;
pub use crate::error::ZonemapError;

// ============================================================================
// Rendering
// ============================================================================

pub use zonemap_render::{
    Bitmap, Color, FixedAdvanceMeasurer, Point, RecordingRenderer, Rect, Renderer, Size, Stroke,
    TextMeasurer, TextStyle,
};
