//! Side assignment and vertical distribution of labels.
//!
//! Items are split into a left and a right column, each column is sorted
//! top to bottom by the item's screen `y`, and the column's height is cut
//! into equal bands with one label centered in each band.

use std::cmp::Ordering;

use tracing::debug;
use zonemap_core::logging::targets;

use super::adapter::{MapAdapter, NoteImageAdapter};

/// Which edge of the view a label is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Order two items by ascending screen `y`.
///
/// Uses the total order of [`f32::total_cmp`], so a NaN `y` sorts after
/// every finite one. There is no secondary key, so the relative order of
/// items at the same `y` is unspecified.
pub fn compare_by_y<A: MapAdapter + ?Sized>(
    adapter: &A,
    first: &A::Item,
    second: &A::Item,
) -> Ordering {
    adapter
        .coordinates(first)
        .y
        .total_cmp(&adapter.coordinates(second).y)
}

/// Vertical center of slot `index` when `count` labels share `height`.
///
/// Returns `None` when `count` is zero or `index` is out of range.
pub fn slot_center(index: usize, count: usize, height: f32) -> Option<f32> {
    if index >= count {
        return None;
    }
    Some(height / count as f32 * (index as f32 + 0.5))
}

/// Centers of every slot in a column of `count` labels.
pub fn slot_centers(count: usize, height: f32) -> impl Iterator<Item = f32> {
    (0..count).filter_map(move |index| slot_center(index, count, height))
}

/// The left and right columns of a note view, each sorted top to bottom.
///
/// Rebuilt wholesale whenever the adapter changes.
#[derive(Debug, Clone)]
pub struct SideLists<T> {
    left: Vec<T>,
    right: Vec<T>,
}

impl<T> Default for SideLists<T> {
    fn default() -> Self {
        Self {
            left: Vec::new(),
            right: Vec::new(),
        }
    }
}

impl<T> SideLists<T> {
    /// Items on the left edge, top to bottom.
    pub fn left(&self) -> &[T] {
        &self.left
    }

    /// Items on the right edge, top to bottom.
    pub fn right(&self) -> &[T] {
        &self.right
    }

    /// Items on the given side.
    pub fn side(&self, side: Side) -> &[T] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Total number of items across both sides.
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

impl<T: Clone> SideLists<T> {
    /// Partition and sort every item the adapter provides.
    pub fn build<A>(adapter: &A) -> Self
    where
        A: NoteImageAdapter<Item = T> + ?Sized,
    {
        let mut left = Vec::new();
        let mut right = Vec::new();
        for index in 0..adapter.count() {
            let item = adapter.item_at(index);
            if adapter.is_left_side(&item) {
                left.push(item);
            } else {
                right.push(item);
            }
        }

        left.sort_by(|a, b| compare_by_y(adapter, a, b));
        right.sort_by(|a, b| compare_by_y(adapter, a, b));

        debug!(
            target: targets::LAYOUT,
            left = left.len(),
            right = right.len(),
            "side lists rebuilt"
        );
        Self { left, right }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zonemap_render::{Bitmap, Point, Stroke, TextStyle};

    /// Items as `(y, left)` pairs.
    struct Heights(Vec<(f32, bool)>);

    impl MapAdapter for Heights {
        type Item = (f32, bool);

        fn count(&self) -> usize {
            self.0.len()
        }

        fn item_at(&self, index: usize) -> Self::Item {
            self.0[index]
        }

        fn bitmap_for(&self, _item: &Self::Item) -> Option<Bitmap> {
            None
        }

        fn coordinates(&self, item: &Self::Item) -> Point {
            Point::new(0.0, item.0)
        }
    }

    impl NoteImageAdapter for Heights {
        fn is_left_side(&self, item: &Self::Item) -> bool {
            item.1
        }

        fn label(&self, _item: &Self::Item) -> String {
            String::new()
        }

        fn label_style(&self, _item: &Self::Item) -> TextStyle {
            TextStyle::default()
        }

        fn line_style(&self, _item: &Self::Item) -> Stroke {
            Stroke::default()
        }
    }

    fn ys(items: &[(f32, bool)]) -> Vec<f32> {
        items.iter().map(|item| item.0).collect()
    }

    #[test]
    fn test_build_splits_and_sorts() {
        let adapter = Heights(vec![
            (30.0, true),
            (5.0, false),
            (10.0, true),
            (1.0, false),
        ]);
        let lists = SideLists::build(&adapter);
        assert_eq!(ys(lists.left()), vec![10.0, 30.0]);
        assert_eq!(ys(lists.right()), vec![1.0, 5.0]);
        assert_eq!(lists.len(), 4);
    }

    #[test]
    fn test_nan_compares_after_finite() {
        let adapter = Heights(Vec::new());
        let nan = (f32::NAN, true);
        let finite = (1.0e9, true);
        assert_eq!(compare_by_y(&adapter, &finite, &nan), Ordering::Less);
        assert_eq!(compare_by_y(&adapter, &nan, &finite), Ordering::Greater);
        assert_eq!(compare_by_y(&adapter, &nan, &nan), Ordering::Equal);
    }

    #[test]
    fn test_nan_y_sorts_last() {
        let adapter = Heights(vec![(3.0, true), (f32::NAN, true), (1.0, true)]);
        let left = ys(SideLists::build(&adapter).left());
        assert_eq!(&left[..2], &[1.0, 3.0]);
        assert!(left[2].is_nan());
    }

    #[test]
    fn test_many_items_with_nan_y() {
        for count in [21, 33, 64] {
            let items = (0..count)
                .map(|i| match i % 3 {
                    0 => (f32::NAN, true),
                    _ => (((i * 37) % 101) as f32, true),
                })
                .collect();
            let left = ys(SideLists::build(&Heights(items)).left());
            let nans = (0..count).filter(|i| i % 3 == 0).count();
            let (finite, tail) = left.split_at(count - nans);

            assert!(
                finite.windows(2).all(|pair| pair[0] <= pair[1]),
                "{count}: {finite:?}"
            );
            assert!(finite.iter().all(|y| y.is_finite()));
            assert!(tail.iter().all(|y| y.is_nan()));
        }
    }

    #[test]
    fn test_three_slots_in_300() {
        let centers: Vec<f32> = slot_centers(3, 300.0).collect();
        assert_eq!(centers, vec![50.0, 150.0, 250.0]);
    }

    #[test]
    fn test_slot_center_formula() {
        let height = 733.0;
        for count in 1..12 {
            for index in 0..count {
                let expected = height / count as f32 * (index as f32 + 0.5);
                assert_eq!(slot_center(index, count, height), Some(expected));
            }
        }
    }

    #[test]
    fn test_no_slots() {
        assert_eq!(slot_centers(0, 500.0).count(), 0);
        assert_eq!(slot_center(0, 0, 500.0), None);
        assert_eq!(slot_center(3, 3, 500.0), None);
    }
}
