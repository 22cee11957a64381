//! Widget event types.
//!
//! Events are delivered to a widget through [`Widget::event`](super::Widget::event).
//! Positions are in widget-local coordinates.

use zonemap_render::{Point, Size};

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left,
    /// Secondary button (usually right).
    Right,
    /// Middle button (scroll wheel click).
    Middle,
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Resize event, sent when a widget's size changes.
#[derive(Debug, Clone, Copy)]
pub struct ResizeEvent {
    pub base: EventBase,
    pub old_size: Size,
    pub new_size: Size,
}

impl ResizeEvent {
    pub fn new(old_size: Size, new_size: Size) -> Self {
        Self {
            base: EventBase::new(),
            old_size,
            new_size,
        }
    }
}

/// Mouse press event.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl MousePressEvent {
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
        }
    }
}

/// Mouse release event.
#[derive(Debug, Clone, Copy)]
pub struct MouseReleaseEvent {
    pub base: EventBase,
    pub button: MouseButton,
    pub local_pos: Point,
}

impl MouseReleaseEvent {
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
        }
    }
}

/// Mouse move event.
#[derive(Debug, Clone, Copy)]
pub struct MouseMoveEvent {
    pub base: EventBase,
    pub local_pos: Point,
}

impl MouseMoveEvent {
    pub fn new(local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
        }
    }
}

/// Phase of a touch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Finger went down.
    Started,
    /// Finger moved.
    Moved,
    /// Finger lifted.
    Ended,
    /// The system cancelled the touch.
    Cancelled,
}

/// A single-point touch event.
#[derive(Debug, Clone, Copy)]
pub struct TouchEvent {
    pub base: EventBase,
    /// Identifier of the touch point.
    pub id: u64,
    pub phase: TouchPhase,
    pub local_pos: Point,
}

impl TouchEvent {
    pub fn new(id: u64, phase: TouchPhase, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            id,
            phase,
            local_pos,
        }
    }
}

/// Events a map widget can receive.
#[derive(Debug, Clone, Copy)]
pub enum WidgetEvent {
    Resize(ResizeEvent),
    MousePress(MousePressEvent),
    MouseRelease(MouseReleaseEvent),
    MouseMove(MouseMoveEvent),
    Touch(TouchEvent),
}

impl WidgetEvent {
    fn base(&self) -> &EventBase {
        match self {
            Self::Resize(e) => &e.base,
            Self::MousePress(e) => &e.base,
            Self::MouseRelease(e) => &e.base,
            Self::MouseMove(e) => &e.base,
            Self::Touch(e) => &e.base,
        }
    }

    fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::Resize(e) => &mut e.base,
            Self::MousePress(e) => &mut e.base,
            Self::MouseRelease(e) => &mut e.base,
            Self::MouseMove(e) => &mut e.base,
            Self::Touch(e) => &mut e.base,
        }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        self.base_mut().accept();
    }

    /// Position of a press-down, if this event is one.
    ///
    /// A press-down is a primary mouse press or a touch entering
    /// [`TouchPhase::Started`].
    pub fn press_position(&self) -> Option<Point> {
        match self {
            Self::MousePress(e) if e.button == MouseButton::Left => Some(e.local_pos),
            Self::Touch(e) if e.phase == TouchPhase::Started => Some(e.local_pos),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_position() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(
            WidgetEvent::MousePress(MousePressEvent::new(MouseButton::Left, p)).press_position(),
            Some(p)
        );
        assert_eq!(
            WidgetEvent::MousePress(MousePressEvent::new(MouseButton::Right, p)).press_position(),
            None
        );
        assert_eq!(
            WidgetEvent::Touch(TouchEvent::new(1, TouchPhase::Started, p)).press_position(),
            Some(p)
        );
        assert_eq!(
            WidgetEvent::Touch(TouchEvent::new(1, TouchPhase::Moved, p)).press_position(),
            None
        );
        assert_eq!(
            WidgetEvent::MouseRelease(MouseReleaseEvent::new(MouseButton::Left, p))
                .press_position(),
            None
        );
    }

    #[test]
    fn test_accept() {
        let mut event = WidgetEvent::MouseMove(MouseMoveEvent::new(Point::ZERO));
        assert!(!event.is_accepted());
        event.accept();
        assert!(event.is_accepted());
    }
}
