//! Event model consumed by the pan/zoom controller
//!
//! Host glue translates its native events (DOM, test fixtures) into these
//! types. Handlers report back whether an event was handled so the host
//! knows when to suppress the default action; an ignored wheel event, for
//! instance, must keep scrolling the page.

use super::Point;

/// Modifier keys held during an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
    };

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            meta: false,
        }
    }

    pub fn meta() -> Self {
        Self {
            ctrl: false,
            meta: true,
        }
    }

    /// True when any qualifying modifier is held
    pub fn any(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Pointer button involved in a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

/// A pointer event in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub button: PointerButton,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(position: Point, button: PointerButton, modifiers: Modifiers) -> Self {
        Self {
            position,
            button,
            modifiers,
        }
    }
}

/// A wheel event in screen coordinates; positive `delta_y` scrolls away
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub position: Point,
    pub delta_y: f64,
    pub modifiers: Modifiers,
}

impl WheelEvent {
    pub fn new(position: Point, delta_y: f64, modifiers: Modifiers) -> Self {
        Self {
            position,
            delta_y,
            modifiers,
        }
    }
}

/// Whether a handler consumed an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Event consumed; the host should suppress the default action
    Handled,
    /// Event not for us; the default action proceeds untouched
    Ignored,
}

impl EventOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventOutcome::Handled)
    }
}

/// Event kinds a controller subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Wheel,
    PointerDown,
    PointerMove,
    PointerUp,
    PointerLeave,
    DoubleClick,
}

/// Where a listener is registered.
///
/// Move/up/leave listeners go on the document so a drag that leaves the
/// element's bounds keeps tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    Element,
    Document,
}

/// Handle for a registered listener, used for symmetric teardown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);
