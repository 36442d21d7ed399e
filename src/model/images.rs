use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const MAX_SOURCE_IMAGES: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadMode {
    #[default]
    Append,
    Replace,
}

/// One uploaded payload, kept exactly as it arrived (encoded bytes).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceImage {
    pub name: String,
    pub bytes: Arc<[u8]>,
}

impl SourceImage {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Ordered upload list capped at [`MAX_SOURCE_IMAGES`].
///
/// `current` only drives preview navigation; batch generation always iterates every image.
/// `revision` increments on every list mutation so decode caches can detect staleness.
#[derive(Clone, Debug, Default)]
pub struct SourceImages {
    items: Vec<SourceImage>,
    current: usize,
    revision: u64,
}

impl SourceImages {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SourceImage> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceImage> {
        self.items.iter()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&SourceImage> {
        self.items.get(self.current)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Add uploads; returns how many were accepted before the cap was hit.
    pub fn upload(&mut self, uploads: Vec<SourceImage>, mode: UploadMode) -> usize {
        if mode == UploadMode::Replace {
            self.items.clear();
            self.current = 0;
        }
        let room = MAX_SOURCE_IMAGES.saturating_sub(self.items.len());
        let accepted = uploads.len().min(room);
        self.items.extend(uploads.into_iter().take(accepted));
        self.revision += 1;
        self.clamp_current();
        accepted
    }

    pub fn select(&mut self, index: usize) {
        self.current = index;
        self.clamp_current();
    }

    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.current = (self.current + 1) % self.items.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.items.is_empty() {
            self.current = (self.current + self.items.len() - 1) % self.items.len();
        }
    }

    fn clamp_current(&mut self) {
        self.current = self.current.min(self.items.len().saturating_sub(1));
    }
}
