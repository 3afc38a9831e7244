use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Identifier of one contact point (mouse, pen or finger), as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerId(pub i32);

/// Lifecycle phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    /// Contact started.
    Down,
    /// Contact moved.
    Move,
    /// Contact released.
    Up,
    /// Contact lost (pointer left the surface, system cancelled it).
    Cancel,
}

/// A raw pointer event in viewport (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub id: PointerId,
    pub position: Point,
    /// DOM `isPrimary`: set on a press when no other contact of the same
    /// pointer type is down.
    pub is_primary: bool,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, id: i32, x: f32, y: f32) -> Self {
        Self {
            phase,
            id: PointerId(id),
            position: Point::new(x, y),
            is_primary: false,
        }
    }

    /// Mark the event as coming from the primary pointer.
    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }

    pub fn down(id: i32, x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Down, id, x, y)
    }

    pub fn moved(id: i32, x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Move, id, x, y)
    }

    pub fn up(id: i32, x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Up, id, x, y)
    }

    pub fn cancel(id: i32, x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Cancel, id, x, y)
    }
}

/// Keyboard keys the viewer cares about (simplified set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Space,
    Enter,
    Char(char),
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Option<Key> {
        let key = match key {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "Home" => Key::Home,
            "End" => Key::End,
            " " | "Spacebar" => Key::Space,
            "Enter" => Key::Enter,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return None,
                }
            }
        };
        Some(key)
    }
}
