use crate::catalog::parse_image_payload;
use crate::store::PropertyAssetsRow;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Outcome of removing one image from the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedImage {
    pub url: String,
    /// True when the removed image was the cover and a new cover (or an
    /// empty one) was promoted in its place.
    pub cover_changed: bool,
}

/// The image set an admin accumulates while creating or editing a
/// property: synthetic numeric keys mapped to URLs, plus the designated
/// cover.
///
/// Invariants: the first image added to an empty gallery becomes the
/// cover; removing the cover promotes the lowest-keyed remaining image;
/// emptying the gallery clears the cover. Keys of live images are never
/// reused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageGallery {
    images: BTreeMap<u32, String>,
    cover: String,
}

impl ImageGallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the gallery from a stored assets row, re-keying the images
    /// sequentially. Used when the edit form opens.
    pub fn from_asset(asset: &PropertyAssetsRow) -> Self {
        let urls = asset
            .images
            .as_ref()
            .and_then(parse_image_payload)
            .unwrap_or_default();
        let images = urls
            .into_iter()
            .enumerate()
            .map(|(i, url)| (i as u32 + 1, url))
            .collect();
        Self {
            images,
            cover: asset.cover_image.clone().unwrap_or_default(),
        }
    }

    /// Add an image URL under the next free key. The first image of an
    /// empty gallery is designated cover.
    pub fn add(&mut self, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            return;
        }
        let key = self.images.keys().max().copied().unwrap_or(0) + 1;
        self.images.insert(key, url.to_string());
        if self.cover.is_empty() {
            self.cover = url.to_string();
        }
    }

    /// Remove the image under `key`. When it was the cover, the first
    /// remaining image takes over (or the cover clears if none remain).
    pub fn remove(&mut self, key: u32) -> Option<RemovedImage> {
        let url = self.images.remove(&key)?;
        let cover_changed = self.cover == url;
        if cover_changed {
            self.cover = self.images.values().next().cloned().unwrap_or_default();
        }
        Some(RemovedImage { url, cover_changed })
    }

    pub fn cover(&self) -> &str {
        &self.cover
    }

    /// Cover to persist: the designated one, else the first image.
    pub fn effective_cover(&self) -> Option<String> {
        if !self.cover.is_empty() {
            return Some(self.cover.clone());
        }
        self.images.values().next().cloned()
    }

    pub fn images(&self) -> &BTreeMap<u32, String> {
        &self.images
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Whether there is anything worth writing to the assets table.
    pub fn has_content(&self) -> bool {
        !self.images.is_empty() || !self.cover.is_empty()
    }

    /// The wire form of the image map: a JSON object with stringified
    /// numeric keys, as the store column holds it.
    pub fn to_wire_map(&self) -> Value {
        let map: Map<String, Value> = self
            .images
            .iter()
            .map(|(key, url)| (key.to_string(), Value::String(url.clone())))
            .collect();
        Value::Object(map)
    }
}
