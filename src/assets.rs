pub mod decode;

pub use decode::{DecodedImage, decode_image};

use crate::foundation::error::{AdsmithError, AdsmithResult};
use crate::model::SourceImages;
use std::sync::Arc;

/// Decoded source images, invalidated whenever the upload list changes.
///
/// Failures are cached too, so a corrupt upload is decoded (and logged) once per revision rather
/// than once per variant.
#[derive(Debug, Default)]
pub struct ImageCache {
    revision: Option<u64>,
    slots: Vec<Option<Result<Arc<DecodedImage>, String>>>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decoded image at `index`, `Ok(None)` if there is no such upload.
    pub fn get(
        &mut self,
        images: &SourceImages,
        index: usize,
    ) -> AdsmithResult<Option<Arc<DecodedImage>>> {
        if self.revision != Some(images.revision()) {
            self.revision = Some(images.revision());
            self.slots.clear();
        }
        let Some(source) = images.get(index) else {
            return Ok(None);
        };
        if self.slots.len() < images.len() {
            self.slots.resize_with(images.len(), || None);
        }

        let slot = &mut self.slots[index];
        if slot.is_none() {
            let decoded = decode_image(&source.bytes)
                .map(Arc::new)
                .map_err(|e| format!("failed to decode '{}': {e:#}", source.name));
            if let Err(msg) = &decoded {
                tracing::warn!(index, "{msg}");
            }
            *slot = Some(decoded);
        }
        match slot {
            Some(Ok(img)) => Ok(Some(img.clone())),
            Some(Err(msg)) => Err(AdsmithError::render(msg.clone())),
            None => Ok(None),
        }
    }

    pub fn clear(&mut self) {
        self.revision = None;
        self.slots.clear();
    }
}

#[cfg(test)]
#[path = "../tests/unit/assets/cache.rs"]
mod tests;
