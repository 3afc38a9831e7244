//! Customizable keyboard shortcuts for the viewer.
//!
//! Defaults follow the usual lightbox conventions: Escape closes,
//! ArrowLeft shows the previous image and ArrowRight the next one. Note that
//! this is the opposite of the swipe direction, where dragging right reveals
//! the previous image.

use lightbox_viewport::Key;
use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Viewer action a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Close,
    Prev,
    Next,
}

impl KeyAction {
    pub fn all() -> &'static [KeyAction] {
        &[KeyAction::Close, KeyAction::Prev, KeyAction::Next]
    }

    pub fn name(&self) -> &'static str {
        match self {
            KeyAction::Close => "Close",
            KeyAction::Prev => "Previous image",
            KeyAction::Next => "Next image",
        }
    }

    pub fn message(&self) -> Message {
        match self {
            KeyAction::Close => Message::Close,
            KeyAction::Prev => Message::Prev,
            KeyAction::Next => Message::Next,
        }
    }
}

/// Keybinding configuration for the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Closes the viewer
    #[serde(default = "default_close")]
    pub close: Key,
    /// Previous image
    #[serde(default = "default_prev")]
    pub prev: Key,
    /// Next image
    #[serde(default = "default_next")]
    pub next: Key,
}

fn default_close() -> Key {
    Key::Escape
}

fn default_prev() -> Key {
    Key::ArrowLeft
}

fn default_next() -> Key {
    Key::ArrowRight
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            close: default_close(),
            prev: default_prev(),
            next: default_next(),
        }
    }
}

impl KeyBindings {
    /// Get the action bound to a key, if any.
    pub fn action_for_key(&self, key: Key) -> Option<KeyAction> {
        if key == self.close {
            Some(KeyAction::Close)
        } else if key == self.prev {
            Some(KeyAction::Prev)
        } else if key == self.next {
            Some(KeyAction::Next)
        } else {
            None
        }
    }

    pub fn key_for(&self, action: KeyAction) -> Key {
        match action {
            KeyAction::Close => self.close,
            KeyAction::Prev => self.prev,
            KeyAction::Next => self.next,
        }
    }

    /// Check if a key is already bound to another action.
    /// Returns the name of that action, if any.
    pub fn key_conflict(&self, key: Key, exclude: Option<KeyAction>) -> Option<&'static str> {
        KeyAction::all()
            .iter()
            .filter(|action| Some(**action) != exclude)
            .find(|action| self.key_for(**action) == key)
            .map(|action| action.name())
    }

    /// Fall back to the defaults when two actions share a key, since only
    /// the first of them could ever fire.
    pub fn sanitized(self) -> Self {
        for &action in KeyAction::all() {
            let key = self.key_for(action);
            if let Some(other) = self.key_conflict(key, Some(action)) {
                log::warn!(
                    "{} and {} are both bound to {:?}, using default keybindings",
                    action.name(),
                    other,
                    key
                );
                return Self::default();
            }
        }
        self
    }
}
