//! Map widgets and the pieces they are built from.
//!
//! - [`ImageMapView`]: background bitmap plus item pins
//! - [`NoteImageView`]: an `ImageMapView` with side labels and leader lines
//! - [`MapAdapter`] / [`NoteImageAdapter`]: the data-provider seams
//! - [`HitRegionMap`]: pixel rectangles recorded while painting

mod adapter;
mod events;
mod hit_region;
mod image_map_view;
mod label;
mod layout;
mod note_image_view;
mod traits;

pub use adapter::{MapAdapter, NoteImageAdapter};
pub use events::{
    EventBase, MouseButton, MouseMoveEvent, MousePressEvent, MouseReleaseEvent, ResizeEvent,
    TouchEvent, TouchPhase, WidgetEvent,
};
pub use hit_region::HitRegionMap;
pub use image_map_view::ImageMapView;
pub use label::{LabelBlock, LabelLine, LabelPlacement, leader_end};
pub use layout::{Side, SideLists, compare_by_y, slot_center, slot_centers};
pub use note_image_view::{LabelLayout, NoteImageView};
pub use traits::{PaintContext, Widget};
