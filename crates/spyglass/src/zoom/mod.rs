//! Interactive pan/zoom over rendered diagrams
//!
//! The controller is a pure state machine: host glue feeds it pointer and
//! wheel events and it writes transforms back through the [`Surface`] trait.
//! One controller instance owns the interaction state of exactly one
//! rendered diagram.

mod controller;
mod events;
mod surface;
mod transform;

pub use controller::*;
pub use events::*;
pub use surface::*;
pub use transform::*;
