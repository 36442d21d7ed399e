use crate::foundation::core::Canvas;
use serde::{Deserialize, Serialize};

pub const MIN_CUSTOM_SIDE: u32 = 100;
pub const MAX_CUSTOM_SIDE: u32 = 3000;

/// A named output size. Custom sides, when set, supersede the preset for generation and preview.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformDimension {
    pub key: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub selected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_height: Option<u32>,
}

impl PlatformDimension {
    fn preset(key: &str, width: u32, height: u32) -> Self {
        Self {
            key: key.to_string(),
            name: key.to_string(),
            width,
            height,
            selected: false,
            custom_width: None,
            custom_height: None,
        }
    }

    /// Effective render size.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(
            self.custom_width.unwrap_or(self.width),
            self.custom_height.unwrap_or(self.height),
        )
    }

    pub fn set_custom_size(&mut self, width: Option<u32>, height: Option<u32>) {
        self.custom_width = width.map(clamp_side);
        self.custom_height = height.map(clamp_side);
    }
}

pub fn clamp_side(v: u32) -> u32 {
    v.clamp(MIN_CUSTOM_SIDE, MAX_CUSTOM_SIDE)
}

/// Seed catalog of platform presets.
pub fn catalog() -> Vec<PlatformDimension> {
    let mut out = vec![
        PlatformDimension::preset("Facebook_Square", 1080, 1080),
        PlatformDimension::preset("Facebook_Landscape", 1200, 630),
        PlatformDimension::preset("Google_Ads_Square", 1200, 1200),
        PlatformDimension::preset("Google_Ads_Landscape", 1200, 628),
        PlatformDimension::preset("Instagram_Square", 1080, 1080),
        PlatformDimension::preset("Instagram_Story", 1080, 1920),
        PlatformDimension::preset("LinkedIn_Single", 1200, 627),
        PlatformDimension::preset("Twitter_Post", 1200, 675),
    ];
    out[0].selected = true;
    out
}

/// The mutable per-session platform list, in catalog order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformSet(pub Vec<PlatformDimension>);

impl Default for PlatformSet {
    fn default() -> Self {
        Self(catalog())
    }
}

impl PlatformSet {
    pub fn get(&self, key: &str) -> Option<&PlatformDimension> {
        self.0.iter().find(|p| p.key == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut PlatformDimension> {
        self.0.iter_mut().find(|p| p.key == key)
    }

    pub fn selected(&self) -> impl Iterator<Item = &PlatformDimension> {
        self.0.iter().filter(|p| p.selected)
    }

    pub fn selected_count(&self) -> usize {
        self.selected().count()
    }

    /// Select exactly the given keys; unknown keys are returned for reporting.
    pub fn select_only<'a>(&mut self, keys: &'a [String]) -> Vec<&'a str> {
        for p in &mut self.0 {
            p.selected = keys.iter().any(|k| *k == p.key);
        }
        keys.iter()
            .map(String::as_str)
            .filter(|k| self.get(k).is_none())
            .collect()
    }
}
