//! Scripted input replay.
//!
//! A replay script describes an image sequence and a list of input steps
//! (pointer events, key presses, viewer actions). Running it drives a
//! [`Lightbox`] exactly as a host would and reports the final frame. The
//! native binary uses this to reproduce gesture bugs from recorded input.

use lightbox_viewport::{GestureOutcome, Key, PointerEvent, PointerPhase};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ViewerConfig;
use crate::message::{Message, ViewerEvent};
use crate::model::ImageItem;
use crate::viewer::{Lightbox, ViewerSnapshot};

/// A recorded viewer session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayScript {
    pub images: Vec<ImageItem>,
    #[serde(default)]
    pub initial_index: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Overrides the config preference when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_thumbnails: Option<bool>,
    pub steps: Vec<ReplayStep>,
}

/// One input step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayStep {
    /// Open the viewer, optionally at a new initial index
    Open {
        #[serde(default)]
        initial_index: Option<i64>,
    },
    /// Close the viewer
    Close,
    /// Raw pointer event
    Pointer {
        phase: PointerPhase,
        id: i32,
        x: f32,
        y: f32,
        /// DOM `isPrimary`
        #[serde(default)]
        primary: bool,
    },
    /// Key press, named as in DOM `KeyboardEvent.key`
    Key { key: String },
    /// Viewer action (buttons, thumbnails)
    Message { message: Message },
    /// Replace the image sequence
    SetImages { images: Vec<ImageItem> },
}

/// Result of running a script.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Events the viewer emitted, in order
    pub events: Vec<ViewerEvent>,
    /// Number of pointer events that changed the view
    pub gesture_updates: usize,
    /// Final frame
    pub snapshot: ViewerSnapshot,
}

/// Errors that can occur while loading a replay script.
#[derive(Error, Debug)]
pub enum ReplayError {
    /// I/O error reading the script
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReplayScript {
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(json)?)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ReplayError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Run the script against a fresh viewer.
    ///
    /// A `Closed` event is honored immediately, the way a host would.
    pub fn run(&self, config: &ViewerConfig) -> ReplayReport {
        let mut viewer = Lightbox::from_config(self.images.clone(), config)
            .with_initial_index(self.initial_index);
        if let Some(enabled) = self.with_thumbnails {
            viewer = viewer.with_thumbnails(enabled);
        }
        if let Some(title) = &self.title {
            viewer = viewer.with_title(title.clone());
        }

        let mut events = Vec::new();
        let mut gesture_updates = 0;

        for (i, step) in self.steps.iter().enumerate() {
            log::trace!("Step {}: {:?}", i, step);
            let event = match step {
                ReplayStep::Open { initial_index } => {
                    match initial_index {
                        Some(index) => viewer.open_at(*index),
                        None => viewer.set_open(true),
                    }
                    None
                }
                ReplayStep::Close => {
                    viewer.close();
                    None
                }
                ReplayStep::Pointer {
                    phase,
                    id,
                    x,
                    y,
                    primary,
                } => {
                    let mut event = PointerEvent::new(*phase, *id, *x, *y);
                    event.is_primary = *primary;
                    let outcome = viewer.handle_pointer(&event);
                    if outcome != GestureOutcome::None {
                        gesture_updates += 1;
                    }
                    match outcome {
                        GestureOutcome::Navigated => viewer
                            .index()
                            .map(|index| ViewerEvent::Navigated { index }),
                        _ => None,
                    }
                }
                ReplayStep::Key { key } => match Key::from_dom_key(key) {
                    Some(key) => viewer.handle_key(key),
                    None => {
                        log::warn!("Step {}: unknown key {:?}, skipped", i, key);
                        None
                    }
                },
                ReplayStep::Message { message } => viewer.update(*message),
                ReplayStep::SetImages { images } => {
                    viewer.set_images(images.clone());
                    None
                }
            };

            if let Some(event) = event {
                if event == ViewerEvent::Closed {
                    viewer.close();
                }
                events.push(event);
            }
        }

        ReplayReport {
            events,
            gesture_updates,
            snapshot: viewer.snapshot(),
        }
    }
}
