//! Data-provider traits for map widgets.
//!
//! An adapter supplies the items shown on a map and everything needed to
//! draw them. Items are opaque to the widgets; they are cloned into side
//! lists and hit regions and handed back through callbacks.
//!
//! # Example
//!
//! ```ignore
//! struct Stops(Vec<Stop>);
//!
//! impl MapAdapter for Stops {
//!     type Item = Stop;
//!
//!     fn count(&self) -> usize { self.0.len() }
//!     fn item_at(&self, index: usize) -> Stop { self.0[index].clone() }
//!     fn bitmap_for(&self, _stop: &Stop) -> Option<Bitmap> { None }
//!     fn coordinates(&self, stop: &Stop) -> Point { stop.position }
//! }
//! ```

use zonemap_render::{Bitmap, Point, Stroke, TextStyle};

/// Items placed on an [`ImageMapView`](super::ImageMapView).
pub trait MapAdapter {
    /// The application's item type.
    type Item: Clone + Send + 'static;

    /// Number of items.
    fn count(&self) -> usize;

    /// Item at `index`, for `index < count()`.
    fn item_at(&self, index: usize) -> Self::Item;

    /// Icon for an item. `None` falls back to the placeholder bitmap.
    fn bitmap_for(&self, item: &Self::Item) -> Option<Bitmap>;

    /// Screen position of the item's icon center.
    fn coordinates(&self, item: &Self::Item) -> Point;

    /// Where leader lines meet the icon, as a fraction of its bounds.
    ///
    /// `(0, 0)` is the icon's top-left, `(1, 1)` its bottom-right.
    fn anchor(&self, _item: &Self::Item) -> Point {
        Point::new(0.5, 0.5)
    }

    /// Called when the item's label or pin is tapped.
    fn on_item_clicked(&self, _item: &Self::Item) {}
}

/// Items annotated with side labels on a [`NoteImageView`](super::NoteImageView).
pub trait NoteImageAdapter: MapAdapter {
    /// Whether the item's label goes on the left edge (else the right).
    fn is_left_side(&self, item: &Self::Item) -> bool;

    /// Label text. May contain `\n` line breaks.
    fn label(&self, item: &Self::Item) -> String;

    /// Style of the label text.
    fn label_style(&self, item: &Self::Item) -> TextStyle;

    /// Style of the leader line joining label and icon.
    fn line_style(&self, item: &Self::Item) -> Stroke;
}
