//! Centralized constants for lightbox_viewport
//!
//! Gesture thresholds and zoom bounds live here so the recognizer, the zoom
//! state and the tests all agree on the same boundary values.

// =============================================================================
// Zoom
// =============================================================================

/// Minimum zoom scale (unzoomed, image fits the viewport)
pub const MIN_SCALE: f32 = 1.0;

/// Maximum zoom scale reachable with a pinch
pub const MAX_SCALE: f32 = 4.0;

// =============================================================================
// Gestures
// =============================================================================

/// Movement (in CSS pixels, per axis) after which a drag locks to its dominant axis
pub const AXIS_LOCK_THRESHOLD: f32 = 8.0;

/// Horizontal distance a swipe must exceed to navigate
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Number of simultaneous contacts that form a pinch
pub const PINCH_POINTERS: usize = 2;
