//! Host-side seams for the pan/zoom controller
//!
//! The controller never touches a real document. The host implements
//! [`Surface`] for the rendered graphic it controls and [`GestureHost`] for
//! listener bookkeeping; tests substitute fakes.

use super::{EventKind, ListenerId, ListenerTarget, Point, Transform};

/// Cursor shown over the controlled element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Grabbing,
}

/// The rendered graphic a controller manipulates
pub trait Surface {
    /// Current transform attribute of the diagram element, if any
    fn transform_attr(&self) -> Option<String>;

    /// Apply a new transform to the diagram element
    fn apply_transform(&mut self, transform: Transform);

    /// Set the cursor shown over the container
    fn set_cursor(&mut self, cursor: Cursor);

    /// Convert screen coordinates into the container's local coordinate
    /// space, so pan distances are measured in diagram units rather than
    /// raw screen pixels
    fn to_local(&self, screen: Point) -> Point;
}

/// Listener registration for a controller's lifetime.
///
/// `attach` registers through this trait and retains the returned ids;
/// `dispose` removes exactly those ids. Hosts that churn controllers
/// without disposing them would otherwise accumulate document listeners.
pub trait GestureHost {
    /// Register a listener and return its handle
    fn add_listener(&mut self, target: ListenerTarget, kind: EventKind) -> ListenerId;

    /// Remove a previously registered listener
    fn remove_listener(&mut self, id: ListenerId);

    /// Disable the underlying zoom library's own wheel/drag bindings so the
    /// controller is the only active gesture path
    fn disable_native_gestures(&mut self);
}
