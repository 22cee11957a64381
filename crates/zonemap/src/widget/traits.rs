//! The widget trait and paint context.

use zonemap_render::{Rect, Renderer, Size, TextMeasurer};

use super::events::WidgetEvent;

/// Everything a widget needs to paint one frame.
///
/// The host opens the frame on the renderer (`begin_frame`) before calling
/// [`Widget::paint`] and closes it afterwards.
pub struct PaintContext<'a> {
    renderer: &'a mut dyn Renderer,
    measurer: &'a dyn TextMeasurer,
    widget_rect: Rect,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context for a widget occupying `widget_rect`.
    pub fn new(
        renderer: &'a mut dyn Renderer,
        measurer: &'a dyn TextMeasurer,
        widget_rect: Rect,
    ) -> Self {
        Self {
            renderer,
            measurer,
            widget_rect,
        }
    }

    /// Get the renderer.
    pub fn renderer(&mut self) -> &mut (dyn Renderer + 'a) {
        &mut *self.renderer
    }

    /// Get the text measurer.
    pub fn measurer(&self) -> &'a dyn TextMeasurer {
        self.measurer
    }

    /// The widget's rectangle in local coordinates.
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }

    pub fn width(&self) -> f32 {
        self.widget_rect.width()
    }

    pub fn height(&self) -> f32 {
        self.widget_rect.height()
    }

    pub fn size(&self) -> Size {
        self.widget_rect.size
    }
}

/// A paintable, interactive element.
pub trait Widget {
    /// Current size of the widget.
    fn size(&self) -> Size;

    /// Apply a new size.
    fn resize(&mut self, new_size: Size);

    /// Paint the widget.
    ///
    /// Takes `&mut self` because painting refreshes the widget's hit regions.
    fn paint(&mut self, ctx: &mut PaintContext<'_>);

    /// Handle an event.
    ///
    /// Returns `true` if the event was handled.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }

    /// The widget's rectangle in local coordinates.
    fn rect(&self) -> Rect {
        let size = self.size();
        Rect::new(0.0, 0.0, size.width, size.height)
    }
}
