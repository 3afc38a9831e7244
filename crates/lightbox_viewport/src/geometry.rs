//! Two-point geometry used by the gesture recognizer.

use crate::constants::{MAX_SCALE, MIN_SCALE};

/// A position in viewport (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset from `origin` to this point.
    pub fn delta_from(&self, origin: Point) -> (f32, f32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f32 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Point halfway between `a` and `b`.
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Clamp a zoom scale into `[MIN_SCALE, MAX_SCALE]`.
///
/// NaN collapses to `MIN_SCALE` so a bad ratio can never leak into the transform.
pub fn clamp_scale(scale: f32) -> f32 {
    clamp_scale_within(scale, MIN_SCALE, MAX_SCALE)
}

/// Clamp a zoom scale into `[min, max]`, mapping NaN to `min`.
pub fn clamp_scale_within(scale: f32, min: f32, max: f32) -> f32 {
    if scale.is_nan() {
        return min;
    }
    scale.clamp(min, max)
}
