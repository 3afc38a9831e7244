use wasm_bindgen::prelude::*;

use lightbox_viewport::{Key, PointerEvent, PointerPhase};

use crate::config::ViewerConfig;
use crate::message::{Message, ViewerEvent};
use crate::model::ImageSequence;
use crate::viewer::Lightbox;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let level = ViewerConfig::load_from_local_storage()
        .map(|config| config.preferences.log_level)
        .unwrap_or_default();
    if console_log::init_with_level(level.to_level_filter().to_level().unwrap_or(log::Level::Info))
        .is_err()
    {
        web_sys::console::log_1(&"Logger already initialized".into());
    }
}

/// Viewer handle for a browser renderer.
///
/// The page forwards pointer and key events and reads back the frame as JSON
/// after each call that returned true.
#[wasm_bindgen]
pub struct WasmLightbox {
    inner: Lightbox,
}

#[wasm_bindgen]
impl WasmLightbox {
    /// Create a closed viewer from a JSON array of `{source|url|dataUrl, caption?, name?}`.
    #[wasm_bindgen(constructor)]
    pub fn new(images_json: &str) -> Result<WasmLightbox, JsError> {
        let images: ImageSequence = serde_json::from_str(images_json)?;
        let config = ViewerConfig::load_from_local_storage().unwrap_or_default();
        Ok(WasmLightbox {
            inner: Lightbox::from_config(images, &config),
        })
    }

    pub fn set_images(&mut self, images_json: &str) -> Result<(), JsError> {
        let images: ImageSequence = serde_json::from_str(images_json)?;
        self.inner.set_images(images);
        Ok(())
    }

    pub fn set_title(&mut self, title: &str) {
        self.inner.set_title(title);
    }

    pub fn set_thumbnails(&mut self, enabled: bool) {
        self.inner.set_thumbnails(enabled);
    }

    pub fn open(&mut self, initial_index: i32) {
        self.inner.open_at(i64::from(initial_index));
    }

    pub fn close(&mut self) {
        self.inner.close();
    }

    /// `is_primary` is the DOM `PointerEvent.isPrimary` flag.
    pub fn pointer_down(&mut self, id: i32, x: f32, y: f32, is_primary: bool) -> bool {
        let mut event = PointerEvent::down(id, x, y);
        event.is_primary = is_primary;
        self.dispatch(&event)
    }

    pub fn pointer_move(&mut self, id: i32, x: f32, y: f32) -> bool {
        self.pointer(PointerPhase::Move, id, x, y)
    }

    pub fn pointer_up(&mut self, id: i32, x: f32, y: f32) -> bool {
        self.pointer(PointerPhase::Up, id, x, y)
    }

    pub fn pointer_cancel(&mut self, id: i32, x: f32, y: f32) -> bool {
        self.pointer(PointerPhase::Cancel, id, x, y)
    }

    fn pointer(&mut self, phase: PointerPhase, id: i32, x: f32, y: f32) -> bool {
        self.dispatch(&PointerEvent::new(phase, id, x, y))
    }

    fn dispatch(&mut self, event: &PointerEvent) -> bool {
        self.inner.handle_pointer(event) != lightbox_viewport::GestureOutcome::None
    }

    /// Handle a `KeyboardEvent.key`. Returns true when the viewer asks to be closed.
    pub fn key_down(&mut self, key: &str) -> bool {
        Key::from_dom_key(key)
            .and_then(|key| self.inner.handle_key(key))
            .is_some_and(|event| event == ViewerEvent::Closed)
    }

    pub fn prev(&mut self) -> bool {
        self.inner.update(Message::Prev).is_some()
    }

    pub fn next(&mut self) -> bool {
        self.inner.update(Message::Next).is_some()
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        self.inner.update(Message::GoTo { index }).is_some()
    }

    pub fn reset_zoom(&mut self) -> bool {
        self.inner.update(Message::ResetZoom).is_some()
    }

    pub fn is_zoomed(&self) -> bool {
        self.inner.is_zoomed()
    }

    /// Current frame as JSON (see `ViewerSnapshot`).
    pub fn snapshot_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.inner.snapshot())?)
    }
}
