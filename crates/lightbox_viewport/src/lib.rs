//! lightbox_viewport - gesture-driven viewport engine for a full-screen image viewer
//!
//! This crate owns the interaction core of the viewer: circular navigation
//! over an image sequence, the zoom/pan transform, and a recognizer that
//! turns raw pointer events into swipe, pan and pinch gestures. It has no
//! knowledge of how images are drawn.

pub mod constants;
mod event;
mod geometry;
mod gesture;
mod navigation;
mod policy;
mod zoom;

pub use event::{Key, PointerEvent, PointerId, PointerPhase};
pub use geometry::{clamp_scale, clamp_scale_within, distance, midpoint, Point};
pub use gesture::{Axis, DragIntent, GestureOutcome, GestureRecognizer, GestureSession};
pub use navigation::{wrap, Navigator};
pub use policy::GesturePolicy;
pub use zoom::ZoomState;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::event::{Key, PointerEvent, PointerId, PointerPhase};
    pub use crate::geometry::Point;
    pub use crate::gesture::{GestureOutcome, GestureRecognizer};
    pub use crate::navigation::Navigator;
    pub use crate::policy::GesturePolicy;
    pub use crate::zoom::ZoomState;
}
