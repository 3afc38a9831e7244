//! Lightbox - full-screen image viewer
//!
//! Viewer session, configuration and input replay built on the
//! `lightbox_viewport` gesture engine.

pub mod config;
pub mod keybindings;
pub mod message;
pub mod model;
pub mod replay;
pub mod viewer;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, LogLevel, ViewerConfig};
pub use keybindings::{KeyAction, KeyBindings};
pub use message::{Message, ViewerEvent};
pub use model::{ImageItem, ImageSequence, ObjectFit};
pub use replay::{ReplayError, ReplayReport, ReplayScript, ReplayStep};
pub use viewer::{Lightbox, Thumbnail, ViewerSnapshot};

pub use lightbox_viewport as viewport;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
