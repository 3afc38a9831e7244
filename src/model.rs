//! Image descriptors shown by the viewer.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// One image in the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageItem {
    /// URL or data URL of the image
    #[serde(alias = "url", alias = "dataUrl", alias = "data_url")]
    pub source: String,
    /// Optional caption
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Optional file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ImageItem {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            caption: None,
            name: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Label for thumbnails and alt text: caption, then name, then "Image N" (1-based).
    pub fn label(&self, index: usize) -> String {
        first_non_blank([self.caption.as_deref(), self.name.as_deref()])
            .map(str::to_string)
            .unwrap_or_else(|| format!("Image {}", index + 1))
    }
}

fn first_non_blank<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
}

/// How the image fills the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectFit {
    /// Whole image visible, letterboxed
    #[default]
    Contain,
    /// Viewport filled, image cropped
    Cover,
}

/// Ordered, immutable list of images for one viewer session.
///
/// Cloning is cheap; replacing the sequence means building a new one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "Vec<ImageItem>", into = "Vec<ImageItem>")]
pub struct ImageSequence {
    items: Rc<[ImageItem]>,
}

impl ImageSequence {
    pub fn new(items: Vec<ImageItem>) -> Self {
        Self {
            items: items.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageItem> {
        self.items.iter()
    }

    /// Whether both handles refer to the same underlying sequence.
    pub fn same_as(&self, other: &ImageSequence) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }

    /// Album title: the explicit title, else the first image's caption, else its name.
    pub fn title(&self, explicit: Option<&str>) -> String {
        let first = self.items.first();
        first_non_blank([
            explicit,
            first.and_then(|im| im.caption.as_deref()),
            first.and_then(|im| im.name.as_deref()),
        ])
        .unwrap_or_default()
        .to_string()
    }
}

impl Default for ImageSequence {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<ImageItem>> for ImageSequence {
    fn from(items: Vec<ImageItem>) -> Self {
        Self::new(items)
    }
}

impl From<ImageSequence> for Vec<ImageItem> {
    fn from(seq: ImageSequence) -> Self {
        seq.items.to_vec()
    }
}
