//! Pixel hit regions recorded during a paint pass.

use zonemap_render::{IntRect, Point};

/// Rectangles drawn in the last frame, each tied to the item it belongs to.
///
/// A map is built fresh by every paint pass and replaces the previous one
/// whole. Lookups return the first region, in insertion order, that
/// contains the point.
#[derive(Debug, Clone)]
pub struct HitRegionMap<T> {
    regions: Vec<(IntRect, T)>,
}

impl<T> Default for HitRegionMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HitRegionMap<T> {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            regions: Vec::with_capacity(capacity),
        }
    }

    /// Record a region.
    pub fn insert(&mut self, rect: IntRect, item: T) {
        self.regions.push((rect, item));
    }

    /// First region containing the pixel `(x, y)`, edges inclusive.
    pub fn hit(&self, x: i32, y: i32) -> Option<(&IntRect, &T)> {
        self.regions
            .iter()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(rect, item)| (rect, item))
    }

    /// Round `point` to the nearest pixel, then [`hit`](Self::hit).
    pub fn hit_point(&self, point: Point) -> Option<(&IntRect, &T)> {
        let (x, y) = point.round_to_pixel();
        self.hit(x, y)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Iterate regions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&IntRect, &T)> {
        self.regions.iter().map(|(rect, item)| (rect, item))
    }

    /// Just the rectangles, in insertion order.
    pub fn rects(&self) -> impl Iterator<Item = IntRect> + '_ {
        self.regions.iter().map(|(rect, _)| *rect)
    }
}
