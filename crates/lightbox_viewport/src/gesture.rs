//! Pointer gesture recognition for the image viewport.
//!
//! Turns raw pointer events from one or two contacts into exactly one of:
//! - swipe-to-navigate (one contact, unzoomed)
//! - drag-to-pan (one contact, zoomed)
//! - pinch-to-zoom (two contacts)
//!
//! The intent of a single-contact drag is fixed when it starts, so pan and
//! swipe can never both apply to the same session.

use crate::constants::PINCH_POINTERS;
use crate::event::{PointerEvent, PointerId, PointerPhase};
use crate::geometry::{distance, midpoint, Point};
use crate::navigation::Navigator;
use crate::policy::GesturePolicy;
use crate::zoom::ZoomState;

/// Dominant movement axis of a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// What a single-contact drag does, decided at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragIntent {
    /// Unzoomed: navigate on release if the horizontal travel is large enough
    Swipe,
    /// Zoomed: translate the image, starting from this offset
    Pan { origin_x: f32, origin_y: f32 },
}

/// The live pointer session. At most one exists at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureSession {
    /// No session
    #[default]
    Idle,
    /// One contact is dragging
    SingleDrag {
        pointer: PointerId,
        start: Point,
        last: Point,
        locked_axis: Option<Axis>,
        intent: DragIntent,
    },
    /// Two contacts are pinching
    Pinch {
        start_distance: f32,
        start_scale: f32,
        center: Point,
    },
}

impl GestureSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureSession::Idle)
    }

    pub fn is_pinch(&self) -> bool {
        matches!(self, GestureSession::Pinch { .. })
    }

    pub fn is_drag(&self) -> bool {
        matches!(self, GestureSession::SingleDrag { .. })
    }
}

/// What processing one event changed, so the host knows what to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureOutcome {
    /// Nothing observable changed
    #[default]
    None,
    /// The index moved (zoom was reset along with it)
    Navigated,
    /// The zoom scale changed
    Zoomed,
    /// The pan offset changed
    Panned,
}

/// Recognizes drag, swipe and pinch gestures from raw pointer events.
///
/// The recognizer is the only writer of the navigator and zoom state while
/// it processes an event; both are borrowed per call rather than stored.
#[derive(Debug, Clone, Default)]
pub struct GestureRecognizer {
    policy: GesturePolicy,
    /// Live contacts in press order
    pointers: Vec<(PointerId, Point)>,
    session: GestureSession,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: GesturePolicy) -> Self {
        Self {
            policy: policy.sanitized(),
            ..Self::default()
        }
    }

    pub fn policy(&self) -> &GesturePolicy {
        &self.policy
    }

    pub fn set_policy(&mut self, policy: GesturePolicy) {
        self.policy = policy.sanitized();
    }

    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    /// Number of contacts currently down.
    pub fn live_pointers(&self) -> usize {
        self.pointers.len()
    }

    /// Drop all contacts and the active session.
    pub fn reset(&mut self) {
        if !self.session.is_idle() {
            log::debug!("Gesture session discarded");
        }
        self.pointers.clear();
        self.session = GestureSession::Idle;
    }

    /// Process one pointer event, updating `nav` and `zoom` as the gesture dictates.
    pub fn handle(
        &mut self,
        event: &PointerEvent,
        nav: &mut Navigator,
        zoom: &mut ZoomState,
    ) -> GestureOutcome {
        match event.phase {
            PointerPhase::Down => self.pointer_down(event, zoom),
            PointerPhase::Move => self.pointer_move(event.id, event.position, zoom),
            PointerPhase::Up | PointerPhase::Cancel => {
                self.pointer_up(event.id, event.position, nav, zoom)
            }
        }
    }

    fn position_of(&self, id: PointerId) -> Option<Point> {
        self.pointers
            .iter()
            .find(|(pid, _)| *pid == id)
            .map(|(_, pos)| *pos)
    }

    fn pointer_down(&mut self, event: &PointerEvent, zoom: &ZoomState) -> GestureOutcome {
        let (id, position) = (event.id, event.position);

        // A primary press means every other contact has already gone away.
        if event.is_primary && self.pointers.iter().any(|(pid, _)| *pid != id) {
            log::debug!(
                "Primary press {:?}, dropping {} stale contact(s)",
                id,
                self.pointers.len()
            );
            self.pointers.clear();
            self.session = GestureSession::Idle;
        }

        // A press for a live contact means its release was lost.
        if let Some(index) = self.pointers.iter().position(|(pid, _)| *pid == id) {
            log::debug!("Repeated press for {:?}, previous release lost", id);
            self.pointers.remove(index);
            self.session = GestureSession::Idle;
            if self.pointers.len() >= PINCH_POINTERS {
                self.start_pinch(zoom);
            }
        }
        self.pointers.push((id, position));

        match self.pointers.len() {
            1 => self.start_drag(id, position, zoom),
            PINCH_POINTERS => self.start_pinch(zoom),
            n => log::trace!("Ignoring extra contact {:?} ({} live)", id, n),
        }
        GestureOutcome::None
    }

    fn start_drag(&mut self, pointer: PointerId, position: Point, zoom: &ZoomState) {
        let intent = if zoom.is_zoomed() {
            DragIntent::Pan {
                origin_x: zoom.x,
                origin_y: zoom.y,
            }
        } else {
            DragIntent::Swipe
        };
        log::debug!(
            "Drag start {:?} at ({:.1}, {:.1}), intent {:?}",
            pointer,
            position.x,
            position.y,
            intent
        );
        self.session = GestureSession::SingleDrag {
            pointer,
            start: position,
            last: position,
            locked_axis: None,
            intent,
        };
    }

    /// Start (or re-baseline) a pinch from the first two live contacts.
    fn start_pinch(&mut self, zoom: &ZoomState) {
        let (a, b) = match (self.pointers.first(), self.pointers.get(1)) {
            (Some(&(_, a)), Some(&(_, b))) => (a, b),
            _ => return,
        };
        if self.session.is_drag() {
            log::debug!("Second contact, promoting drag to pinch");
        }
        let start_distance = distance(a, b);
        let center = midpoint(a, b);
        log::debug!(
            "Pinch start: distance {:.1}, scale {:.2}, center ({:.1}, {:.1})",
            start_distance,
            zoom.scale,
            center.x,
            center.y
        );
        self.session = GestureSession::Pinch {
            start_distance,
            start_scale: zoom.scale,
            center,
        };
    }

    fn pointer_move(&mut self, id: PointerId, position: Point, zoom: &mut ZoomState) -> GestureOutcome {
        let Some(index) = self.pointers.iter().position(|(pid, _)| *pid == id) else {
            return GestureOutcome::None;
        };
        self.pointers[index].1 = position;

        if let GestureSession::Pinch {
            start_distance,
            start_scale,
            ..
        } = self.session
        {
            // Only the first two contacts drive the pinch.
            if index >= PINCH_POINTERS {
                return GestureOutcome::None;
            }
            return self.update_pinch(start_distance, start_scale, zoom);
        }

        let lock_threshold = self.policy.axis_lock_threshold;
        let GestureSession::SingleDrag {
            pointer,
            start,
            last,
            locked_axis,
            intent,
        } = &mut self.session
        else {
            return GestureOutcome::None;
        };
        if *pointer != id {
            return GestureOutcome::None;
        }

        let (dx, dy) = position.delta_from(*start);
        if locked_axis.is_none() && (dx.abs() > lock_threshold || dy.abs() > lock_threshold) {
            let axis = if dx.abs() > dy.abs() {
                Axis::Horizontal
            } else {
                Axis::Vertical
            };
            log::debug!("Drag locked to {:?} (dx {:.1}, dy {:.1})", axis, dx, dy);
            *locked_axis = Some(axis);
        }
        *last = position;

        match *intent {
            DragIntent::Pan { origin_x, origin_y } => {
                if zoom.apply_pan(origin_x + dx, origin_y + dy) {
                    log::trace!("Pan to ({:.1}, {:.1})", zoom.x, zoom.y);
                    GestureOutcome::Panned
                } else {
                    GestureOutcome::None
                }
            }
            DragIntent::Swipe => GestureOutcome::None,
        }
    }

    fn update_pinch(&self, start_distance: f32, start_scale: f32, zoom: &mut ZoomState) -> GestureOutcome {
        if start_distance <= 0.0 {
            return GestureOutcome::None;
        }
        let (a, b) = match (self.pointers.first(), self.pointers.get(1)) {
            (Some(&(_, a)), Some(&(_, b))) => (a, b),
            _ => return GestureOutcome::None,
        };
        let current = distance(a, b);
        if current <= 0.0 {
            return GestureOutcome::None;
        }
        let target = start_scale * (current / start_distance);
        if zoom.apply_pinch_within(target, self.policy.max_scale) {
            log::trace!("Pinch scale {:.3}", zoom.scale);
            GestureOutcome::Zoomed
        } else {
            GestureOutcome::None
        }
    }

    fn pointer_up(
        &mut self,
        id: PointerId,
        position: Point,
        nav: &mut Navigator,
        zoom: &mut ZoomState,
    ) -> GestureOutcome {
        let Some(index) = self.pointers.iter().position(|(pid, _)| *pid == id) else {
            log::trace!("Release for unknown pointer {:?} at ({:.1}, {:.1})", id, position.x, position.y);
            return GestureOutcome::None;
        };
        self.pointers.remove(index);

        match std::mem::take(&mut self.session) {
            GestureSession::SingleDrag {
                pointer,
                start,
                last,
                locked_axis,
                intent,
            } if pointer == id => {
                log::debug!("Drag end {:?}", pointer);
                match intent {
                    DragIntent::Swipe => self.finish_swipe(start, last, locked_axis, nav, zoom),
                    DragIntent::Pan { .. } => GestureOutcome::None,
                }
            }
            GestureSession::Pinch { .. } if index < PINCH_POINTERS => {
                self.after_pinch_release(zoom);
                GestureOutcome::None
            }
            // A contact that does not drive the session went away.
            other => {
                self.session = other;
                GestureOutcome::None
            }
        }
    }

    fn finish_swipe(
        &mut self,
        start: Point,
        last: Point,
        locked_axis: Option<Axis>,
        nav: &mut Navigator,
        zoom: &mut ZoomState,
    ) -> GestureOutcome {
        if locked_axis != Some(Axis::Horizontal) {
            return GestureOutcome::None;
        }
        let dx = last.x - start.x;
        let threshold = self.policy.swipe_threshold;

        // Dragging right reveals the previous image.
        let navigated = if dx > threshold {
            log::debug!("Swipe right ({:.1}), previous image", dx);
            nav.prev()
        } else if dx < -threshold {
            log::debug!("Swipe left ({:.1}), next image", dx);
            nav.next()
        } else {
            false
        };

        if navigated {
            zoom.reset();
            GestureOutcome::Navigated
        } else {
            GestureOutcome::None
        }
    }

    fn after_pinch_release(&mut self, zoom: &ZoomState) {
        match self.pointers.len() {
            0 => log::debug!("Pinch end"),
            1 => {
                if zoom.is_zoomed() {
                    let (id, position) = self.pointers[0];
                    log::debug!("Pinch end, continuing as pan with {:?}", id);
                    self.start_drag(id, position, zoom);
                } else {
                    log::debug!("Pinch end, unzoomed, waiting for release");
                }
            }
            _ => self.start_pinch(zoom),
        }
    }

    /// Current position of a live pointer.
    pub fn pointer_position(&self, id: PointerId) -> Option<Point> {
        self.position_of(id)
    }
}
