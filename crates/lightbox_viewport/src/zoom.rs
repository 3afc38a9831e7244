//! Zoom transform of the displayed image.
//!
//! The transform is applied by the renderer as `scale(s) translate(x, y)`
//! around the image center. A scale of `MIN_SCALE` is the canonical
//! unzoomed state, in which panning is disabled.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SCALE, MIN_SCALE};
use crate::geometry::clamp_scale_within;

/// Scale and translation of the current image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomState {
    pub scale: f32,
    pub x: f32,
    pub y: f32,
}

impl ZoomState {
    pub fn new(scale: f32, x: f32, y: f32) -> Self {
        Self { scale, x, y }
    }

    /// Unzoomed, centered transform.
    pub fn identity() -> Self {
        Self::new(MIN_SCALE, 0.0, 0.0)
    }

    /// Return to the unzoomed, centered transform.
    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    /// Whether the image is magnified. Gates panning, swipe eligibility and
    /// the "reset zoom" affordance.
    pub fn is_zoomed(&self) -> bool {
        self.scale > MIN_SCALE
    }

    /// Set the scale from a pinch, clamped to `[MIN_SCALE, MAX_SCALE]`.
    /// Returns true if the transform changed.
    pub fn apply_pinch(&mut self, scale: f32) -> bool {
        self.apply_pinch_within(scale, MAX_SCALE)
    }

    /// Set the scale from a pinch, clamped to `[MIN_SCALE, max_scale]`.
    ///
    /// Non-finite input is ignored. Landing back on the unzoomed scale also
    /// recenters the image, since it can no longer be panned.
    pub fn apply_pinch_within(&mut self, scale: f32, max_scale: f32) -> bool {
        if !scale.is_finite() {
            log::debug!("Ignoring non-finite pinch scale {}", scale);
            return false;
        }
        let before = *self;
        self.scale = clamp_scale_within(scale, MIN_SCALE, max_scale.max(MIN_SCALE));
        if !self.is_zoomed() {
            self.x = 0.0;
            self.y = 0.0;
        }
        *self != before
    }

    /// Set the translation. Has no effect while unzoomed.
    /// Returns true if the transform changed.
    pub fn apply_pan(&mut self, x: f32, y: f32) -> bool {
        if !self.is_zoomed() || !x.is_finite() || !y.is_finite() {
            return false;
        }
        let changed = self.x != x || self.y != y;
        self.x = x;
        self.y = y;
        changed
    }

    /// CSS transform string for web renderers.
    pub fn css_transform(&self) -> String {
        format!("scale({}) translate({}px, {}px)", self.scale, self.x, self.y)
    }
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let z = ZoomState::default();
        assert_eq!(z, ZoomState::new(1.0, 0.0, 0.0));
        assert!(!z.is_zoomed());
    }

    #[test]
    fn test_reset() {
        let mut z = ZoomState::new(3.0, 12.0, -4.0);
        z.reset();
        assert_eq!(z, ZoomState::identity());
    }

    #[test]
    fn test_apply_pinch_clamps() {
        let mut z = ZoomState::default();
        assert!(z.apply_pinch(2.0));
        assert_eq!(z.scale, 2.0);
        z.apply_pinch(9.0);
        assert_eq!(z.scale, MAX_SCALE);
        z.apply_pinch(0.25);
        assert_eq!(z.scale, MIN_SCALE);
    }

    #[test]
    fn test_apply_pinch_ignores_non_finite() {
        let mut z = ZoomState::new(2.0, 5.0, 5.0);
        assert!(!z.apply_pinch(f32::NAN));
        assert!(!z.apply_pinch(f32::INFINITY));
        assert_eq!(z, ZoomState::new(2.0, 5.0, 5.0));
    }

    #[test]
    fn test_scale_stays_in_bounds_for_any_ratio_sequence() {
        let mut z = ZoomState::default();
        let ratios = [0.0, 0.1, 1.5, 3.0, 100.0, 0.9, 1e-6, 7.5, 1.0, 2.2];
        for r in ratios {
            z.apply_pinch(z.scale * r);
            assert!(z.scale >= MIN_SCALE && z.scale <= MAX_SCALE, "scale {}", z.scale);
        }
    }

    #[test]
    fn test_pan_gated_while_unzoomed() {
        let mut z = ZoomState::default();
        assert!(!z.apply_pan(15.0, -10.0));
        assert_eq!(z, ZoomState::identity());
    }

    #[test]
    fn test_pan_while_zoomed() {
        let mut z = ZoomState::default();
        z.apply_pinch(2.0);
        assert!(z.apply_pan(15.0, -10.0));
        assert_eq!(z, ZoomState::new(2.0, 15.0, -10.0));
    }

    #[test]
    fn test_pinch_back_to_unzoomed_recenters() {
        let mut z = ZoomState::new(2.0, 30.0, 40.0);
        z.apply_pinch(0.8);
        assert_eq!(z, ZoomState::identity());
    }

    #[test]
    fn test_custom_max_scale() {
        let mut z = ZoomState::default();
        z.apply_pinch_within(10.0, 6.0);
        assert_eq!(z.scale, 6.0);
    }

    #[test]
    fn test_css_transform() {
        let z = ZoomState::new(2.0, 15.0, -10.0);
        assert_eq!(z.css_transform(), "scale(2) translate(15px, -10px)");
    }
}
