//! The full-screen image viewer session.
//!
//! `Lightbox` ties the viewport engine to the host: it tracks whether the
//! viewer is open, which sequence it shows and where it starts, dispatches
//! pointer/keyboard input, and exposes a render-ready [`ViewerSnapshot`].
//!
//! Opening the viewer (or changing the sequence or initial index while it is
//! open) re-targets the navigator and resets the zoom. Every index change
//! also resets the zoom and drops any gesture in progress.

use lightbox_viewport::prelude::*;
use serde::Serialize;

use crate::config::ViewerConfig;
use crate::keybindings::KeyBindings;
use crate::message::{Message, ViewerEvent};
use crate::model::{ImageItem, ImageSequence, ObjectFit};

/// Interactive state of one image viewer.
#[derive(Debug, Clone)]
pub struct Lightbox {
    images: ImageSequence,
    open: bool,
    initial_index: i64,
    title: Option<String>,
    with_thumbnails: bool,
    object_fit: ObjectFit,
    keybindings: KeyBindings,
    nav: Navigator,
    zoom: ZoomState,
    gestures: GestureRecognizer,
}

impl Lightbox {
    /// Create a closed viewer over `images`.
    pub fn new(images: impl Into<ImageSequence>) -> Self {
        let images = images.into();
        let nav = Navigator::new(0, images.len());
        Self {
            images,
            open: false,
            initial_index: 0,
            title: None,
            with_thumbnails: false,
            object_fit: ObjectFit::default(),
            keybindings: KeyBindings::default(),
            nav,
            zoom: ZoomState::default(),
            gestures: GestureRecognizer::new(),
        }
    }

    /// Create a closed viewer configured from `config`.
    pub fn from_config(images: impl Into<ImageSequence>, config: &ViewerConfig) -> Self {
        Self::new(images)
            .with_thumbnails(config.preferences.with_thumbnails)
            .with_object_fit(config.preferences.object_fit)
            .with_policy(config.gestures)
            .with_keybindings(config.keybindings.clone())
    }

    pub fn with_initial_index(mut self, index: i64) -> Self {
        self.set_initial_index(index);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.set_title(title);
        self
    }

    pub fn with_thumbnails(mut self, enabled: bool) -> Self {
        self.set_thumbnails(enabled);
        self
    }

    pub fn with_object_fit(mut self, fit: ObjectFit) -> Self {
        self.object_fit = fit;
        self
    }

    pub fn with_policy(mut self, policy: GesturePolicy) -> Self {
        self.gestures.set_policy(policy);
        self
    }

    pub fn with_keybindings(mut self, keybindings: KeyBindings) -> Self {
        self.keybindings = keybindings;
        self
    }

    // ---------------------------------------------------------------------
    // Lifecycle
    // ---------------------------------------------------------------------

    /// Open or close the viewer. A closed→open transition starts a fresh session.
    pub fn set_open(&mut self, open: bool) {
        if open == self.open {
            return;
        }
        self.open = open;
        if open {
            log::info!(
                "Viewer opened with {} image(s) at index {}",
                self.images.len(),
                self.initial_index
            );
            self.restart();
        } else {
            log::info!("Viewer closed");
            self.gestures.reset();
        }
    }

    /// Open the viewer at `initial_index`.
    pub fn open_at(&mut self, initial_index: i64) {
        self.initial_index = initial_index;
        if self.open {
            self.restart();
        } else {
            self.set_open(true);
        }
    }

    pub fn close(&mut self) {
        self.set_open(false);
    }

    /// Replace the image sequence. Restarts the session if the viewer is open
    /// and the sequence actually changed.
    pub fn set_images(&mut self, images: impl Into<ImageSequence>) {
        let images = images.into();
        let changed = !images.same_as(&self.images);
        self.images = images;
        if !changed {
            return;
        }
        if self.open {
            log::debug!("Image sequence replaced ({} images)", self.images.len());
            self.restart();
        } else {
            // Keep the navigator in range; the real reset happens on open.
            self.nav.reset_to(self.initial_index, self.images.len());
        }
    }

    /// Change the requested starting index. Restarts the session if open.
    pub fn set_initial_index(&mut self, index: i64) {
        if index == self.initial_index {
            return;
        }
        self.initial_index = index;
        if self.open {
            self.restart();
        } else {
            self.nav.reset_to(index, self.images.len());
        }
    }

    /// Set the album title shown in the header and used as alt text.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Show or hide the thumbnail rail.
    pub fn set_thumbnails(&mut self, enabled: bool) {
        self.with_thumbnails = enabled;
    }

    fn restart(&mut self) {
        self.nav.reset_to(self.initial_index, self.images.len());
        self.zoom.reset();
        self.gestures.reset();
    }

    /// Whether input is accepted: open with at least one image.
    fn interactive(&self) -> bool {
        self.open && !self.images.is_empty()
    }

    // ---------------------------------------------------------------------
    // Input
    // ---------------------------------------------------------------------

    /// Feed a raw pointer event to the gesture recognizer.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> GestureOutcome {
        if !self.interactive() {
            return GestureOutcome::None;
        }
        self.gestures.handle(event, &mut self.nav, &mut self.zoom)
    }

    /// Handle a key press. Unbound keys are ignored.
    pub fn handle_key(&mut self, key: Key) -> Option<ViewerEvent> {
        if !self.open {
            return None;
        }
        let action = self.keybindings.action_for_key(key)?;
        log::debug!("Key {:?} -> {:?}", key, action);
        self.update(action.message())
    }

    /// Apply a viewer action (navigation buttons, thumbnails, reset zoom, close).
    pub fn update(&mut self, message: Message) -> Option<ViewerEvent> {
        if !self.open {
            return None;
        }
        match message {
            Message::Close => Some(ViewerEvent::Closed),
            Message::Prev => self.navigate(|nav| nav.prev()),
            Message::Next => self.navigate(|nav| nav.next()),
            Message::GoTo { index } => {
                let index = i64::try_from(index).unwrap_or(i64::MAX);
                self.navigate(|nav| nav.go_to(index))
            }
            Message::ResetZoom => {
                if self.zoom == ZoomState::identity() {
                    return None;
                }
                self.zoom.reset();
                Some(ViewerEvent::ZoomReset)
            }
        }
    }

    fn navigate(&mut self, step: impl FnOnce(&mut Navigator) -> bool) -> Option<ViewerEvent> {
        if self.images.is_empty() || !step(&mut self.nav) {
            return None;
        }
        // A gesture still in progress belongs to the previous image.
        self.gestures.reset();
        self.zoom.reset();
        let index = self.nav.index()?;
        log::debug!("Showing image {}/{}", index + 1, self.images.len());
        Some(ViewerEvent::Navigated { index })
    }

    // ---------------------------------------------------------------------
    // Outputs
    // ---------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Index of the shown image; `None` when the sequence is empty.
    pub fn index(&self) -> Option<usize> {
        self.nav.index()
    }

    pub fn zoom(&self) -> ZoomState {
        self.zoom
    }

    /// Whether to offer the "reset zoom" affordance.
    pub fn is_zoomed(&self) -> bool {
        self.zoom.is_zoomed()
    }

    pub fn images(&self) -> &ImageSequence {
        &self.images
    }

    pub fn current_image(&self) -> Option<&ImageItem> {
        self.images.get(self.nav.index()?)
    }

    pub fn title(&self) -> String {
        self.images.title(self.title.as_deref())
    }

    pub fn gestures(&self) -> &GestureRecognizer {
        &self.gestures
    }

    pub fn keybindings(&self) -> &KeyBindings {
        &self.keybindings
    }

    /// Everything a renderer needs to draw the current frame.
    pub fn snapshot(&self) -> ViewerSnapshot {
        let len = self.images.len();
        let visible = self.interactive();
        let index = if visible { self.nav.index() } else { None };
        let many = len > 1;

        let thumbnails = if visible && self.with_thumbnails && many {
            self.images
                .iter()
                .enumerate()
                .map(|(i, image)| Thumbnail {
                    index: i,
                    source: image.source.clone(),
                    label: image.label(i),
                    active: Some(i) == index,
                })
                .collect()
        } else {
            Vec::new()
        };

        ViewerSnapshot {
            open: visible,
            index,
            len,
            counter: match index {
                Some(i) if many => Some(format!("{} / {}", i + 1, len)),
                _ => None,
            },
            current: index.and_then(|i| self.images.get(i)).cloned(),
            alt: index
                .map(|i| {
                    let title = self.title();
                    if title.is_empty() {
                        format!("Image {}", i + 1)
                    } else {
                        title
                    }
                })
                .unwrap_or_default(),
            title: if visible { self.title() } else { String::new() },
            zoom: self.zoom,
            is_zoomed: visible && self.zoom.is_zoomed(),
            transform: self.zoom.css_transform(),
            object_fit: self.object_fit,
            show_nav_buttons: visible && many,
            show_thumbnails: !thumbnails.is_empty(),
            thumbnails,
        }
    }
}

/// One entry of the thumbnail rail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Thumbnail {
    pub index: usize,
    pub source: String,
    pub label: String,
    pub active: bool,
}

/// Render-ready view of the viewer state.
///
/// When the viewer is closed or has no images, `open` is false and nothing
/// should be drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewerSnapshot {
    pub open: bool,
    pub index: Option<usize>,
    pub len: usize,
    /// "N / M" counter, only for multi-image sequences
    pub counter: Option<String>,
    pub current: Option<ImageItem>,
    /// Alt text for the main image
    pub alt: String,
    pub title: String,
    pub zoom: ZoomState,
    /// Show the "reset zoom" button
    pub is_zoomed: bool,
    /// CSS transform for the main image
    pub transform: String,
    pub object_fit: ObjectFit,
    pub show_nav_buttons: bool,
    pub show_thumbnails: bool,
    pub thumbnails: Vec<Thumbnail>,
}
