//! A map view with labels stacked along its edges.
//!
//! [`NoteImageView`] wraps an [`ImageMapView`] and adds, for every item, a
//! text label on the left or right edge of the view joined to the item's
//! icon by a straight leader line. Labels on each edge are sorted by the
//! item's screen `y` and spread over equal vertical slots.
//!
//! A press on a label selects its item, in the same way a press on the
//! item's pin does.
//!
//! # Example
//!
//! ```ignore
//! let handler = UiHandler::new();
//! let mut view = NoteImageView::new(handler.clone()).with_background(map);
//! view.resize(Size::new(480.0, 800.0));
//! view.set_adapter(Arc::new(stops));
//!
//! view.item_clicked().connect(|stop| println!("selected {}", stop.name));
//!
//! handler.process_all();
//! if view.take_repaint() {
//!     renderer.begin_frame(Color::TRANSPARENT, view.size());
//!     view.paint(&mut PaintContext::new(&mut renderer, &measurer, view.rect()));
//!     renderer.end_frame();
//! }
//! ```

use std::sync::Arc;

use tracing::{debug, trace, trace_span};
use zonemap_core::logging::{span_names, targets};
use zonemap_core::{Signal, UiHandler};
use zonemap_render::{Bitmap, Point, Renderer, Size, Stroke, TextMeasurer, TextStyle};

use super::adapter::NoteImageAdapter;
use super::events::WidgetEvent;
use super::hit_region::HitRegionMap;
use super::image_map_view::ImageMapView;
use super::label::{LabelBlock, LabelPlacement, leader_end};
use super::layout::{Side, SideLists, slot_center};
use super::traits::{PaintContext, Widget};
use crate::config::NoteImageConfig;

/// Everything needed to draw one label and its leader line.
#[derive(Debug, Clone)]
pub struct LabelLayout<T> {
    pub item: T,
    pub side: Side,
    /// Position within its side list.
    pub slot: usize,
    pub block: LabelBlock,
    pub placement: LabelPlacement,
    /// Where the leader line meets the item's icon.
    pub leader_end: Point,
    pub text_style: TextStyle,
    pub line_style: Stroke,
}

/// An image map with side labels and leader lines.
///
/// # Signals
///
/// - `item_clicked(Item)`: a label or pin was pressed
pub struct NoteImageView<A: NoteImageAdapter> {
    base: ImageMapView<A>,
    sides: SideLists<A::Item>,
    labels: HitRegionMap<A::Item>,
    config: NoteImageConfig,
}

impl<A: NoteImageAdapter> NoteImageView<A> {
    /// Create a view with the default configuration.
    pub fn new(handler: UiHandler) -> Self {
        Self::with_config(NoteImageConfig::default(), handler)
    }

    pub fn with_config(config: NoteImageConfig, handler: UiHandler) -> Self {
        let base = ImageMapView::new(handler)
            .with_scale_to_background(config.scale_to_background)
            .with_clear_color(config.clear_color());
        Self {
            base,
            sides: SideLists::default(),
            labels: HitRegionMap::new(),
            config,
        }
    }

    /// Set the background using builder pattern.
    pub fn with_background(mut self, background: Bitmap) -> Self {
        self.base.set_background(Some(background));
        self
    }

    pub fn config(&self) -> &NoteImageConfig {
        &self.config
    }

    /// Apply a new configuration and mark the view dirty.
    pub fn set_config(&mut self, config: NoteImageConfig) {
        self.base.set_scale_to_background(config.scale_to_background);
        self.base.set_clear_color(config.clear_color());
        self.config = config;
        self.base.update();
    }

    /// Attach an adapter.
    ///
    /// The side lists are rebuilt immediately. The repaint request is
    /// posted to the UI handler and takes effect when it is drained.
    pub fn set_adapter(&mut self, adapter: Arc<A>) {
        self.base.replace_adapter(adapter);
        self.rebuild_side_lists();
        self.base.post_update();
    }

    /// Re-read the adapter after its contents changed.
    pub fn notify_data_changed(&mut self) {
        self.rebuild_side_lists();
        self.base.post_update();
    }

    fn rebuild_side_lists(&mut self) {
        let _span = trace_span!(target: targets::LAYOUT, span_names::REBUILD).entered();
        self.sides = match self.base.adapter() {
            Some(adapter) => SideLists::build(&**adapter),
            None => SideLists::default(),
        };
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn base(&self) -> &ImageMapView<A> {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut ImageMapView<A> {
        &mut self.base
    }

    pub fn adapter(&self) -> Option<&Arc<A>> {
        self.base.adapter()
    }

    /// The current left and right columns.
    pub fn side_lists(&self) -> &SideLists<A::Item> {
        &self.sides
    }

    /// Label rectangles recorded by the last paint.
    pub fn label_regions(&self) -> &HitRegionMap<A::Item> {
        &self.labels
    }

    /// Signal emitted with the selected item.
    pub fn item_clicked(&self) -> &Signal<A::Item> {
        &self.base.item_clicked
    }

    pub fn needs_repaint(&self) -> bool {
        self.base.needs_repaint()
    }

    pub fn take_repaint(&self) -> bool {
        self.base.take_repaint()
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Compute every label's geometry for the current size.
    ///
    /// Nothing is cached, so the result always reflects the latest size
    /// and side lists.
    pub fn layout(&self, measurer: &dyn TextMeasurer) -> Vec<LabelLayout<A::Item>> {
        let Some(adapter) = self.base.adapter() else {
            return Vec::new();
        };

        let width = self.base.width();
        let height = self.base.height();
        let mut layouts = Vec::with_capacity(self.sides.len());

        for side in [Side::Left, Side::Right] {
            let items = self.sides.side(side);
            for (slot, item) in items.iter().enumerate() {
                let Some(center_y) = slot_center(slot, items.len(), height) else {
                    continue;
                };

                let text_style = adapter.label_style(item);
                let block = LabelBlock::measure(
                    &adapter.label(item),
                    &text_style,
                    measurer,
                    self.config.line_spacing,
                );
                let placement = block.place(side, center_y, width, self.config.text_margin);

                let bitmap = self.base.resolve_bitmap(adapter, item);
                let end = leader_end(
                    self.base.location(adapter, item),
                    adapter.anchor(item),
                    self.base.icon_size(&bitmap),
                );

                layouts.push(LabelLayout {
                    item: item.clone(),
                    side,
                    slot,
                    block,
                    placement,
                    leader_end: end,
                    text_style,
                    line_style: adapter.line_style(item),
                });
            }
        }
        layouts
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// Draw every label and leader line, replacing the label hit map.
    pub fn draw_labels(&mut self, renderer: &mut dyn Renderer, measurer: &dyn TextMeasurer) {
        let layouts = self.layout(measurer);
        let mut labels = HitRegionMap::with_capacity(layouts.len());

        for layout in layouts {
            for (line, origin) in layout
                .block
                .lines()
                .iter()
                .zip(&layout.placement.line_origins)
            {
                renderer.draw_text(&line.text, *origin, &layout.text_style);
            }
            renderer.draw_line(
                layout.placement.leader_start,
                layout.leader_end,
                &layout.line_style,
            );
            labels.insert(layout.placement.rect.to_int_rect(), layout.item);
        }

        trace!(target: targets::PAINT, labels = labels.len(), "labels drawn");
        self.labels = labels;
    }

    // =========================================================================
    // Input
    // =========================================================================

    fn handle_label_press(&self, event: &mut WidgetEvent) -> bool {
        let Some(position) = event.press_position() else {
            return false;
        };
        let (x, y) = position.round_to_pixel();
        let Some((_, item)) = self.labels.hit(x, y) else {
            return false;
        };

        debug!(target: targets::INPUT, x, y, "label pressed");
        self.base.click(item);
        event.accept();
        true
    }
}

impl<A: NoteImageAdapter> Widget for NoteImageView<A> {
    fn size(&self) -> Size {
        self.base.size()
    }

    fn resize(&mut self, new_size: Size) {
        self.base.resize(new_size);
    }

    fn paint(&mut self, ctx: &mut PaintContext<'_>) {
        let _span = trace_span!(target: targets::PAINT, span_names::PAINT_FRAME).entered();
        let measurer = ctx.measurer();
        self.base.paint_background(ctx.renderer());
        self.base.draw_pins(ctx.renderer());
        self.draw_labels(ctx.renderer(), measurer);
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        let consumed = self.handle_label_press(event);
        // The base view still sees the event; it skips pin hits once accepted.
        let handled = self.base.event(event);
        consumed || handled
    }
}

impl<A: NoteImageAdapter> std::fmt::Debug for NoteImageView<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteImageView")
            .field("base", &self.base)
            .field("left", &self.sides.left().len())
            .field("right", &self.sides.right().len())
            .field("labels", &self.labels.len())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zonemap_render::{Color, FixedAdvanceMeasurer, RecordingRenderer};

    use crate::widget::adapter::MapAdapter;

    #[derive(Clone, Debug)]
    struct Note {
        text: &'static str,
        at: Point,
        left: bool,
    }

    struct Notes(Vec<Note>);

    impl MapAdapter for Notes {
        type Item = Note;

        fn count(&self) -> usize {
            self.0.len()
        }

        fn item_at(&self, index: usize) -> Note {
            self.0[index].clone()
        }

        fn bitmap_for(&self, _note: &Note) -> Option<Bitmap> {
            None
        }

        fn coordinates(&self, note: &Note) -> Point {
            note.at
        }
    }

    impl NoteImageAdapter for Notes {
        fn is_left_side(&self, note: &Note) -> bool {
            note.left
        }

        fn label(&self, note: &Note) -> String {
            note.text.to_owned()
        }

        fn label_style(&self, _note: &Note) -> TextStyle {
            TextStyle::new(10.0, Color::BLACK)
        }

        fn line_style(&self, _note: &Note) -> Stroke {
            Stroke::new(Color::RED, 1.0)
        }
    }

    fn view_with(notes: Vec<Note>) -> NoteImageView<Notes> {
        let mut view = NoteImageView::new(UiHandler::new());
        view.resize(Size::new(400.0, 300.0));
        view.set_adapter(Arc::new(Notes(notes)));
        view
    }

    #[test]
    fn test_layout_without_adapter_is_empty() {
        let view: NoteImageView<Notes> = NoteImageView::new(UiHandler::new());
        assert!(view.layout(&FixedAdvanceMeasurer::default()).is_empty());
    }

    #[test]
    fn test_layout_uses_both_sides() {
        let view = view_with(vec![
            Note {
                text: "Quay",
                at: Point::new(200.0, 20.0),
                left: true,
            },
            Note {
                text: "Mill",
                at: Point::new(200.0, 40.0),
                left: false,
            },
        ]);
        let layouts = view.layout(&FixedAdvanceMeasurer::default());

        assert_eq!(layouts.len(), 2);
        assert_eq!(layouts[0].side, Side::Left);
        assert_eq!(layouts[0].placement.leader_start, Point::new(40.0, 150.0));
        assert_eq!(layouts[1].side, Side::Right);
        assert_eq!(layouts[1].placement.leader_start, Point::new(360.0, 150.0));
    }

    #[test]
    fn test_config_changes_margin() {
        let mut view = view_with(vec![Note {
            text: "Quay",
            at: Point::new(200.0, 20.0),
            left: true,
        }]);
        view.set_config(NoteImageConfig::default().with_text_margin(4.0));

        let layouts = view.layout(&FixedAdvanceMeasurer::default());
        assert_eq!(layouts[0].placement.leader_start.x, 24.0);
    }

    #[test]
    fn test_draw_labels_replaces_hit_map() {
        let mut view = view_with(vec![Note {
            text: "Quay",
            at: Point::new(200.0, 20.0),
            left: true,
        }]);
        let measurer = FixedAdvanceMeasurer::default();
        let mut renderer = RecordingRenderer::new();

        view.draw_labels(&mut renderer, &measurer);
        assert_eq!(view.label_regions().len(), 1);

        view.set_adapter(Arc::new(Notes(Vec::new())));
        view.draw_labels(&mut renderer, &measurer);
        assert!(view.label_regions().is_empty());
    }
}
