//! Tunable gesture thresholds.

use serde::{Deserialize, Serialize};

use crate::constants::{AXIS_LOCK_THRESHOLD, MAX_SCALE, MIN_SCALE, SWIPE_THRESHOLD};

/// Thresholds and bounds used by the gesture recognizer and zoom state.
///
/// Every field falls back to its constant when missing from a config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GesturePolicy {
    /// Per-axis movement after which a drag locks to its dominant axis
    #[serde(default = "default_axis_lock_threshold")]
    pub axis_lock_threshold: f32,

    /// Horizontal distance a swipe must exceed to navigate
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f32,

    /// Highest zoom scale; the lowest is always `MIN_SCALE` (unzoomed)
    #[serde(default = "default_max_scale")]
    pub max_scale: f32,
}

fn default_axis_lock_threshold() -> f32 {
    AXIS_LOCK_THRESHOLD
}

fn default_swipe_threshold() -> f32 {
    SWIPE_THRESHOLD
}

fn default_max_scale() -> f32 {
    MAX_SCALE
}

impl Default for GesturePolicy {
    fn default() -> Self {
        Self {
            axis_lock_threshold: AXIS_LOCK_THRESHOLD,
            swipe_threshold: SWIPE_THRESHOLD,
            max_scale: MAX_SCALE,
        }
    }
}

impl GesturePolicy {
    /// Replace unusable values with defaults.
    ///
    /// Thresholds must be finite and non-negative, and `max_scale` must be
    /// finite and not below `MIN_SCALE`.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let mut policy = self;

        if !policy.axis_lock_threshold.is_finite() || policy.axis_lock_threshold < 0.0 {
            log::warn!(
                "Invalid axis lock threshold {}, using {}",
                policy.axis_lock_threshold,
                defaults.axis_lock_threshold
            );
            policy.axis_lock_threshold = defaults.axis_lock_threshold;
        }

        if !policy.swipe_threshold.is_finite() || policy.swipe_threshold < 0.0 {
            log::warn!(
                "Invalid swipe threshold {}, using {}",
                policy.swipe_threshold,
                defaults.swipe_threshold
            );
            policy.swipe_threshold = defaults.swipe_threshold;
        }

        if !policy.max_scale.is_finite() || policy.max_scale < MIN_SCALE {
            log::warn!(
                "Invalid max scale {}, using {}",
                policy.max_scale,
                defaults.max_scale
            );
            policy.max_scale = defaults.max_scale;
        }

        policy
    }
}
