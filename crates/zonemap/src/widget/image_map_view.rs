//! The base map view: a background bitmap with item pins on top.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace};
use zonemap_core::logging::targets;
use zonemap_core::{Signal, UiHandler};
use zonemap_render::{Bitmap, Color, IntRect, Point, Rect, Renderer, Size};

use super::adapter::MapAdapter;
use super::events::WidgetEvent;
use super::hit_region::HitRegionMap;
use super::traits::{PaintContext, Widget};

/// A view that draws a background bitmap and one pin per adapter item.
///
/// The background is aspect-fit and centered. Pins are drawn at the
/// adapter's screen coordinates and are hit-testable until the next paint.
///
/// # Signals
///
/// - `item_clicked(Item)`: a pin was pressed
pub struct ImageMapView<A: MapAdapter> {
    size: Size,
    background: Option<Bitmap>,
    destination: Rect,
    ratio: f32,
    scale_to_background: bool,
    clear_color: Color,
    adapter: Option<Arc<A>>,
    pins: HitRegionMap<A::Item>,
    handler: UiHandler,
    repaint: Arc<AtomicBool>,

    /// Emitted with the item whose pin or label was pressed.
    pub item_clicked: Signal<A::Item>,
}

impl<A: MapAdapter> ImageMapView<A> {
    /// Create an empty view that posts its repaint requests to `handler`.
    pub fn new(handler: UiHandler) -> Self {
        Self {
            size: Size::ZERO,
            background: None,
            destination: Rect::ZERO,
            ratio: 1.0,
            scale_to_background: false,
            clear_color: Color::TRANSPARENT,
            adapter: None,
            pins: HitRegionMap::new(),
            handler,
            repaint: Arc::new(AtomicBool::new(false)),
            item_clicked: Signal::new(),
        }
    }

    /// Set the background using builder pattern.
    pub fn with_background(mut self, background: Bitmap) -> Self {
        self.set_background(Some(background));
        self
    }

    /// Set the scale-to-background flag using builder pattern.
    pub fn with_scale_to_background(mut self, enabled: bool) -> Self {
        self.scale_to_background = enabled;
        self
    }

    /// Set the erase color using builder pattern.
    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn background(&self) -> Option<&Bitmap> {
        self.background.as_ref()
    }

    /// Replace the background and recompute its destination.
    pub fn set_background(&mut self, background: Option<Bitmap>) {
        self.background = background;
        self.update_destination();
        self.update();
    }

    /// Where the background is drawn, in view coordinates.
    pub fn destination(&self) -> Rect {
        self.destination
    }

    /// Natural background width over drawn width.
    pub fn background_ratio(&self) -> f32 {
        self.ratio
    }

    pub fn scale_to_background(&self) -> bool {
        self.scale_to_background
    }

    /// Shrink icons by the background ratio so they scale with the map.
    pub fn set_scale_to_background(&mut self, enabled: bool) {
        if self.scale_to_background != enabled {
            self.scale_to_background = enabled;
            self.update();
        }
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
        self.update();
    }

    pub fn adapter(&self) -> Option<&Arc<A>> {
        self.adapter.as_ref()
    }

    /// Attach an adapter and request a repaint.
    pub fn set_adapter(&mut self, adapter: Arc<A>) {
        self.replace_adapter(adapter);
        self.post_update();
    }

    pub(crate) fn replace_adapter(&mut self, adapter: Arc<A>) {
        debug!(target: targets::ADAPTER, items = adapter.count(), "adapter attached");
        self.adapter = Some(adapter);
    }

    /// Pin rectangles recorded by the last paint.
    pub fn pin_regions(&self) -> &HitRegionMap<A::Item> {
        &self.pins
    }

    pub fn handler(&self) -> &UiHandler {
        &self.handler
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Screen position of an item's icon center.
    pub fn location(&self, adapter: &A, item: &A::Item) -> Point {
        adapter.coordinates(item)
    }

    /// Drawn size of an icon.
    pub fn icon_size(&self, bitmap: &Bitmap) -> Size {
        if self.scale_to_background {
            bitmap.size().scaled_down(self.ratio)
        } else {
            bitmap.size()
        }
    }

    /// The item's icon, or the shared placeholder when it has none.
    pub fn resolve_bitmap(&self, adapter: &A, item: &A::Item) -> Bitmap {
        adapter.bitmap_for(item).unwrap_or_else(|| {
            trace!(target: targets::PAINT, "no bitmap for item, using placeholder");
            Bitmap::empty()
        })
    }

    /// Whether the pixel `(x, y)` lies in `rect`, edges included.
    pub fn does_intersect(rect: &IntRect, x: i32, y: i32) -> bool {
        rect.contains(x, y)
    }

    fn update_destination(&mut self) {
        let Some(background) = &self.background else {
            self.destination = Rect::ZERO;
            self.ratio = 1.0;
            return;
        };

        self.destination = fit_rect(self.rect(), background.size());
        self.ratio = if self.destination.width() > 0.0 {
            background.width() as f32 / self.destination.width()
        } else {
            1.0
        };
        debug!(
            target: targets::LAYOUT,
            x = self.destination.left(),
            y = self.destination.top(),
            width = self.destination.width(),
            height = self.destination.height(),
            ratio = self.ratio,
            "background destination updated"
        );
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// Erase the view and draw the background into its destination.
    pub fn paint_background(&self, renderer: &mut dyn Renderer) {
        renderer.fill_rect(self.rect(), self.clear_color);
        if let Some(background) = &self.background {
            if !self.destination.is_empty() {
                renderer.draw_image(background, self.destination);
            }
        }
    }

    /// Draw every pin and replace the pin hit map with the new rectangles.
    pub fn draw_pins(&mut self, renderer: &mut dyn Renderer) {
        let Some(adapter) = self.adapter.clone() else {
            self.pins = HitRegionMap::new();
            return;
        };

        let count = adapter.count();
        let mut pins = HitRegionMap::with_capacity(count);
        for index in 0..count {
            let item = adapter.item_at(index);
            let bitmap = self.resolve_bitmap(&adapter, &item);
            let rect = Rect::from_center(self.location(&adapter, &item), self.icon_size(&bitmap));
            renderer.draw_image(&bitmap, rect);
            pins.insert(rect.to_int_rect(), item);
        }

        trace!(target: targets::PAINT, pins = pins.len(), "pins drawn");
        self.pins = pins;
    }

    // =========================================================================
    // Repaint requests
    // =========================================================================

    /// Mark the view as needing a repaint now.
    pub fn update(&self) {
        self.repaint.store(true, Ordering::SeqCst);
    }

    /// Request a repaint on the next drain of the UI handler.
    pub fn post_update(&self) {
        let repaint = Arc::clone(&self.repaint);
        self.handler.post(move || repaint.store(true, Ordering::SeqCst));
    }

    pub fn needs_repaint(&self) -> bool {
        self.repaint.load(Ordering::SeqCst)
    }

    /// Read and clear the repaint flag.
    pub fn take_repaint(&self) -> bool {
        self.repaint.swap(false, Ordering::SeqCst)
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Notify the adapter and listeners that `item` was pressed.
    pub(crate) fn click(&self, item: &A::Item) {
        if let Some(adapter) = &self.adapter {
            adapter.on_item_clicked(item);
        }
        self.item_clicked.emit(item.clone());
    }

    fn handle_pin_press(&mut self, event: &mut WidgetEvent) -> bool {
        if event.is_accepted() {
            return false;
        }
        let Some(position) = event.press_position() else {
            return false;
        };
        let (x, y) = position.round_to_pixel();
        let hit = self
            .pins
            .iter()
            .find(|(rect, _)| Self::does_intersect(rect, x, y))
            .map(|(_, item)| item.clone());

        match hit {
            Some(item) => {
                debug!(target: targets::INPUT, x, y, "pin pressed");
                self.click(&item);
                event.accept();
                true
            }
            None => false,
        }
    }
}

impl<A: MapAdapter> Widget for ImageMapView<A> {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, new_size: Size) {
        if self.size != new_size {
            self.size = new_size;
            self.update_destination();
            self.update();
        }
    }

    fn paint(&mut self, ctx: &mut PaintContext<'_>) {
        self.paint_background(ctx.renderer());
        self.draw_pins(ctx.renderer());
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        if let WidgetEvent::Resize(resize) = event {
            let new_size = resize.new_size;
            self.resize(new_size);
            return true;
        }
        self.handle_pin_press(event)
    }
}

impl<A: MapAdapter> std::fmt::Debug for ImageMapView<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageMapView")
            .field("size", &self.size)
            .field("destination", &self.destination)
            .field("ratio", &self.ratio)
            .field("scale_to_background", &self.scale_to_background)
            .field("has_adapter", &self.adapter.is_some())
            .field("pins", &self.pins.len())
            .finish()
    }
}

/// Aspect-fit `content` inside `bounds`, centered on both axes.
fn fit_rect(bounds: Rect, content: Size) -> Rect {
    if bounds.is_empty() || content.is_empty() {
        return Rect::ZERO;
    }

    let bounds_aspect = bounds.width() / bounds.height();
    let content_aspect = content.width / content.height;

    let (width, height) = if content_aspect > bounds_aspect {
        // Wider than the view; fit to width
        (bounds.width(), bounds.width() / content_aspect)
    } else {
        (bounds.height() * content_aspect, bounds.height())
    };

    Rect::new(
        bounds.left() + (bounds.width() - width) / 2.0,
        bounds.top() + (bounds.height() - height) / 2.0,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::events::{MouseButton, MousePressEvent};
    use parking_lot::Mutex;
    use zonemap_render::{DrawCommand, RecordingRenderer};

    #[derive(Clone, Debug, PartialEq)]
    struct Pin {
        name: &'static str,
        at: Point,
        icon: Option<Bitmap>,
    }

    #[derive(Default)]
    struct Pins {
        pins: Vec<Pin>,
        clicks: Mutex<Vec<&'static str>>,
    }

    impl MapAdapter for Pins {
        type Item = Pin;

        fn count(&self) -> usize {
            self.pins.len()
        }

        fn item_at(&self, index: usize) -> Pin {
            self.pins[index].clone()
        }

        fn bitmap_for(&self, pin: &Pin) -> Option<Bitmap> {
            pin.icon.clone()
        }

        fn coordinates(&self, pin: &Pin) -> Point {
            pin.at
        }

        fn on_item_clicked(&self, pin: &Pin) {
            self.clicks.lock().push(pin.name);
        }
    }

    fn icon(width: u32, height: u32) -> Bitmap {
        Bitmap::solid(width, height, [255, 0, 0, 255]).unwrap()
    }

    #[test]
    fn test_fit_rect_wide_content() {
        let dest = fit_rect(Rect::new(0.0, 0.0, 400.0, 400.0), Size::new(800.0, 400.0));
        assert_eq!(dest, Rect::new(0.0, 100.0, 400.0, 200.0));
    }

    #[test]
    fn test_fit_rect_tall_content() {
        let dest = fit_rect(Rect::new(0.0, 0.0, 400.0, 200.0), Size::new(100.0, 200.0));
        assert_eq!(dest, Rect::new(150.0, 0.0, 100.0, 200.0));
    }

    #[test]
    fn test_fit_rect_empty_bounds() {
        assert_eq!(fit_rect(Rect::ZERO, Size::new(10.0, 10.0)), Rect::ZERO);
    }

    #[test]
    fn test_ratio_follows_resize() {
        let mut view: ImageMapView<Pins> =
            ImageMapView::new(UiHandler::new()).with_background(icon(800, 400));
        assert_eq!(view.background_ratio(), 1.0);

        view.resize(Size::new(400.0, 400.0));
        assert_eq!(view.destination(), Rect::new(0.0, 100.0, 400.0, 200.0));
        assert_eq!(view.background_ratio(), 2.0);

        view.resize(Size::new(200.0, 400.0));
        assert_eq!(view.background_ratio(), 4.0);
    }

    #[test]
    fn test_ratio_without_background() {
        let mut view: ImageMapView<Pins> = ImageMapView::new(UiHandler::new());
        view.resize(Size::new(300.0, 300.0));
        assert_eq!(view.destination(), Rect::ZERO);
        assert_eq!(view.background_ratio(), 1.0);
    }

    #[test]
    fn test_icon_size_scales_with_background() {
        let mut view: ImageMapView<Pins> =
            ImageMapView::new(UiHandler::new()).with_background(icon(800, 400));
        view.resize(Size::new(400.0, 400.0));

        let pin = icon(20, 40);
        assert_eq!(view.icon_size(&pin), Size::new(20.0, 40.0));
        view.set_scale_to_background(true);
        assert_eq!(view.icon_size(&pin), Size::new(10.0, 20.0));
    }

    #[test]
    fn test_draw_pins_records_regions() {
        let adapter = Arc::new(Pins {
            pins: vec![
                Pin {
                    name: "a",
                    at: Point::new(50.0, 50.0),
                    icon: Some(icon(10, 10)),
                },
                Pin {
                    name: "b",
                    at: Point::new(150.0, 80.0),
                    icon: None,
                },
            ],
            ..Default::default()
        });
        let mut view = ImageMapView::new(UiHandler::new());
        view.resize(Size::new(200.0, 200.0));
        view.set_adapter(adapter);

        let mut renderer = RecordingRenderer::new();
        renderer.begin_frame(Color::TRANSPARENT, view.size());
        view.draw_pins(&mut renderer);
        renderer.end_frame();

        let images = renderer.images();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].1, Rect::new(45.0, 45.0, 10.0, 10.0));
        assert!(images[1].0.is_placeholder());

        let rects: Vec<IntRect> = view.pin_regions().rects().collect();
        assert_eq!(rects[0], IntRect::new(45, 45, 55, 55));
        assert_eq!(rects[1], IntRect::new(150, 80, 151, 81));
    }

    #[test]
    fn test_paint_erases_then_draws_background() {
        let mut view: ImageMapView<Pins> = ImageMapView::new(UiHandler::new())
            .with_background(icon(100, 100))
            .with_clear_color(Color::WHITE);
        view.resize(Size::new(100.0, 200.0));

        let mut renderer = RecordingRenderer::new();
        renderer.begin_frame(Color::TRANSPARENT, view.size());
        view.paint_background(&mut renderer);
        renderer.end_frame();

        let commands = renderer.commands();
        assert!(matches!(
            commands[1],
            DrawCommand::FillRect { color, .. } if color == Color::WHITE
        ));
        assert!(matches!(
            &commands[2],
            DrawCommand::Image { dest, .. } if *dest == Rect::new(0.0, 50.0, 100.0, 100.0)
        ));
    }

    #[test]
    fn test_pin_press_clicks_once() {
        let adapter = Arc::new(Pins {
            pins: vec![Pin {
                name: "a",
                at: Point::new(50.0, 50.0),
                icon: Some(icon(10, 10)),
            }],
            ..Default::default()
        });
        let mut view = ImageMapView::new(UiHandler::new());
        view.resize(Size::new(100.0, 100.0));
        view.set_adapter(Arc::clone(&adapter));

        let mut renderer = RecordingRenderer::new();
        view.draw_pins(&mut renderer);

        let mut inside = WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            Point::new(55.0, 45.0),
        ));
        assert!(view.event(&mut inside));
        assert!(inside.is_accepted());

        let mut outside = WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            Point::new(56.0, 45.0),
        ));
        assert!(!view.event(&mut outside));

        assert_eq!(*adapter.clicks.lock(), vec!["a"]);
    }

    #[test]
    fn test_posted_update() {
        let handler = UiHandler::new();
        let mut view: ImageMapView<Pins> = ImageMapView::new(handler.clone());
        view.set_adapter(Arc::new(Pins::default()));

        assert!(!view.needs_repaint());
        assert_eq!(handler.process_all(), 1);
        assert!(view.take_repaint());
        assert!(!view.needs_repaint());
    }
}
