//! The pan/zoom controller state machine

use tracing::{debug, trace};

use super::{
    Cursor, EventKind, EventOutcome, GestureHost, ListenerId, ListenerTarget, Point, PointerButton,
    PointerEvent, Surface, Transform, WheelEvent,
};

/// Wheel scale factor when scrolling away (zoom out)
const WHEEL_OUT_FACTOR: f64 = 0.9;

/// Wheel scale factor when scrolling toward (zoom in)
const WHEEL_IN_FACTOR: f64 = 1.1;

/// Default scale clamp range
const DEFAULT_SCALE_EXTENT: (f64, f64) = (0.1, 10.0);

/// Axis-aligned boundary box for the translation offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanBounds {
    pub min: Point,
    pub max: Point,
}

impl PanBounds {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
        )
    }
}

/// Immutable controller configuration, supplied once at construction
#[derive(Debug, Clone)]
pub struct ZoomOptions {
    /// Scale is clamped into this [min, max] range
    pub scale_extent: (f64, f64),
    /// Optional boundary box for panning
    pub translate_extent: Option<PanBounds>,
    /// Reset to the identity transform on double-click
    pub double_click_to_fit: bool,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            scale_extent: DEFAULT_SCALE_EXTENT,
            translate_extent: None,
            double_click_to_fit: false,
        }
    }
}

/// Explicit interaction phase; the payload travels with the variant instead
/// of lingering in always-present mutable fields
#[derive(Debug, Clone, Copy, PartialEq)]
enum PanPhase {
    Idle,
    Panning {
        /// Pointer-down position in screen coordinates
        start: Point,
        /// Translation offset parsed from the transform at pointer-down
        origin: Point,
    },
}

/// Attaches pan/zoom interaction to one rendered diagram.
///
/// Exactly one controller owns the interaction state of a given diagram;
/// multiple controllers coexist independently, one per diagram on the page.
///
/// Panning requires a qualifying condition on pointer-down: ctrl/meta held,
/// or the middle button. Wheel zoom requires ctrl/meta; an unmodified wheel
/// event is ignored so normal page scrolling is untouched.
pub struct ZoomController {
    options: ZoomOptions,
    phase: PanPhase,
    listeners: Vec<ListenerId>,
}

impl ZoomController {
    pub fn new(options: ZoomOptions) -> Self {
        Self {
            options,
            phase: PanPhase::Idle,
            listeners: Vec::new(),
        }
    }

    /// Whether a pan is currently in progress
    pub fn is_panning(&self) -> bool {
        matches!(self.phase, PanPhase::Panning { .. })
    }

    /// Register listeners for this controller and disable the underlying
    /// library's native gesture bindings.
    ///
    /// Wheel, pointer-down and double-click go on the element; move, up and
    /// leave go on the document so a drag that exits the element's bounds
    /// keeps tracking. Calling `attach` twice without an intervening
    /// `dispose` is a no-op.
    pub fn attach(&mut self, host: &mut dyn GestureHost) {
        if !self.listeners.is_empty() {
            debug!("controller already attached, skipping");
            return;
        }

        self.listeners
            .push(host.add_listener(ListenerTarget::Element, EventKind::Wheel));
        self.listeners
            .push(host.add_listener(ListenerTarget::Element, EventKind::PointerDown));
        if self.options.double_click_to_fit {
            self.listeners
                .push(host.add_listener(ListenerTarget::Element, EventKind::DoubleClick));
        }
        self.listeners
            .push(host.add_listener(ListenerTarget::Document, EventKind::PointerMove));
        self.listeners
            .push(host.add_listener(ListenerTarget::Document, EventKind::PointerUp));
        self.listeners
            .push(host.add_listener(ListenerTarget::Document, EventKind::PointerLeave));

        // Exactly one gesture path must be active from here on
        host.disable_native_gestures();

        debug!(listeners = self.listeners.len(), "controller attached");
    }

    /// Remove every listener registered by `attach`. Idempotent.
    pub fn dispose(&mut self, host: &mut dyn GestureHost) {
        for id in self.listeners.drain(..) {
            host.remove_listener(id);
        }
        self.phase = PanPhase::Idle;
    }

    /// Pointer-down on the element: enter `Panning` when the qualifying
    /// condition holds
    pub fn on_pointer_down(
        &mut self,
        event: &PointerEvent,
        surface: &mut dyn Surface,
    ) -> EventOutcome {
        if !Self::qualifies(event) {
            return EventOutcome::Ignored;
        }

        let current = self.current_transform(surface);
        self.phase = PanPhase::Panning {
            start: event.position,
            origin: current.translation(),
        };
        surface.set_cursor(Cursor::Grabbing);

        trace!(
            x = event.position.x,
            y = event.position.y,
            origin_x = current.x,
            origin_y = current.y,
            "pan started"
        );
        EventOutcome::Handled
    }

    /// Pointer-move on the document: reposition the diagram while panning
    pub fn on_pointer_move(
        &mut self,
        event: &PointerEvent,
        surface: &mut dyn Surface,
    ) -> EventOutcome {
        let PanPhase::Panning { start, origin } = self.phase else {
            return EventOutcome::Ignored;
        };

        // Measure the delta in the container's local space so the diagram
        // tracks the pointer regardless of any outer scaling
        let current_local = surface.to_local(event.position);
        let start_local = surface.to_local(start);
        let dx = current_local.x - start_local.x;
        let dy = current_local.y - start_local.y;

        let scale = self.current_transform(surface).k;
        let mut translation = Point::new(origin.x + dx, origin.y + dy);
        if let Some(bounds) = &self.options.translate_extent {
            translation = bounds.clamp(translation);
        }

        surface.apply_transform(Transform::new(translation.x, translation.y, scale));
        EventOutcome::Handled
    }

    /// Pointer-up on the document: leave `Panning`
    pub fn on_pointer_up(&mut self, surface: &mut dyn Surface) -> EventOutcome {
        self.end_pan(surface)
    }

    /// Pointer leaving the tracked surface: treated like pointer-up
    pub fn on_pointer_leave(&mut self, surface: &mut dyn Surface) -> EventOutcome {
        self.end_pan(surface)
    }

    /// Wheel on the element: focal zoom when ctrl/meta is held, otherwise
    /// ignored entirely
    pub fn on_wheel(&mut self, event: &WheelEvent, surface: &mut dyn Surface) -> EventOutcome {
        if !event.modifiers.any() {
            return EventOutcome::Ignored;
        }

        let factor = if event.delta_y > 0.0 {
            WHEEL_OUT_FACTOR
        } else {
            WHEEL_IN_FACTOR
        };

        let current = self.current_transform(surface);
        let (min, max) = self.options.scale_extent;
        let scale = (current.k * factor).clamp(min, max);

        // Anchor the zoom at the pointer: the diagram point under the
        // cursor stays put while everything scales around it
        let anchor = surface.to_local(event.position);
        let ratio = scale / current.k;
        let x = anchor.x - (anchor.x - current.x) * ratio;
        let y = anchor.y - (anchor.y - current.y) * ratio;

        trace!(factor, scale, "wheel zoom");
        surface.apply_transform(Transform::new(x, y, scale));
        EventOutcome::Handled
    }

    /// Double-click on the element: reset to the identity transform when
    /// configured to do so
    pub fn on_double_click(&mut self, surface: &mut dyn Surface) -> EventOutcome {
        if !self.options.double_click_to_fit {
            return EventOutcome::Ignored;
        }
        surface.apply_transform(Transform::IDENTITY);
        EventOutcome::Handled
    }

    fn end_pan(&mut self, surface: &mut dyn Surface) -> EventOutcome {
        if !self.is_panning() {
            return EventOutcome::Ignored;
        }
        self.phase = PanPhase::Idle;
        surface.set_cursor(Cursor::Default);
        trace!("pan ended");
        EventOutcome::Handled
    }

    /// Permissive gesture gate: a held ctrl/meta modifier or the middle
    /// button qualifies a pointer-down for panning
    fn qualifies(event: &PointerEvent) -> bool {
        event.modifiers.any() || event.button == PointerButton::Middle
    }

    fn current_transform(&self, surface: &dyn Surface) -> Transform {
        surface
            .transform_attr()
            .map(|attr| Transform::parse(&attr))
            .unwrap_or_default()
    }
}
