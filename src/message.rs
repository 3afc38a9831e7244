//! Viewer actions and the events the viewer reports back to its host.
//!
//! Buttons, thumbnails and keyboard shortcuts all resolve to a [`Message`];
//! the viewer answers with at most one [`ViewerEvent`].

use serde::{Deserialize, Serialize};

/// Actions that can be applied to an open viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Message {
    /// Show the previous image (wraps to the last)
    Prev,
    /// Show the next image (wraps to the first)
    Next,
    /// Jump to an image, e.g. from a thumbnail click
    GoTo { index: usize },
    /// Return to the unzoomed view
    ResetZoom,
    /// Ask the host to close the viewer
    Close,
}

/// Something the host should react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ViewerEvent {
    /// Close was requested (Escape or the close button)
    Closed,
    /// A different image is now shown
    Navigated { index: usize },
    /// Zoom was reset to the unzoomed view
    ZoomReset,
}
