use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    #[default]
    Auto,
    Custom,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StretchMode {
    #[default]
    Maintain,
    Stretch,
}

/// How the source image is scaled onto the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageScaleSettings {
    pub mode: ScaleMode,
    /// Share of canvas width the image may occupy (0..=1).
    pub width_ratio: f64,
    /// Share of canvas height the image may occupy (0..=1).
    pub height_ratio: f64,
    /// `"auto"` or `"W:H"`.
    pub aspect_ratio: String,
    pub stretch_mode: StretchMode,
}

impl Default for ImageScaleSettings {
    fn default() -> Self {
        Self {
            mode: ScaleMode::Auto,
            width_ratio: 1.0,
            height_ratio: 1.0,
            aspect_ratio: "auto".to_string(),
            stretch_mode: StretchMode::Maintain,
        }
    }
}

impl ImageScaleSettings {
    pub fn stretched(width_ratio: f64, height_ratio: f64) -> Self {
        Self {
            mode: ScaleMode::Custom,
            width_ratio,
            height_ratio,
            aspect_ratio: "auto".to_string(),
            stretch_mode: StretchMode::Stretch,
        }
    }

    /// Ratio caps clamped so the placed image never leaves the canvas.
    pub fn caps(&self) -> (f64, f64) {
        fn cap(v: f64) -> f64 {
            if v.is_nan() { 1.0 } else { v.clamp(0.0, 1.0) }
        }
        (cap(self.width_ratio), cap(self.height_ratio))
    }

    /// Overriding width/height ratio, if custom mode sets a valid `W:H`.
    pub fn custom_aspect(&self) -> Option<f64> {
        if self.mode != ScaleMode::Custom {
            return None;
        }
        parse_aspect(&self.aspect_ratio)
    }

    pub fn is_stretch(&self) -> bool {
        self.mode == ScaleMode::Custom && self.stretch_mode == StretchMode::Stretch
    }
}

/// Parse `"16:9"` into `16/9`. `"auto"` and malformed or non-positive ratios yield `None`.
pub fn parse_aspect(s: &str) -> Option<f64> {
    let (w, h) = s.trim().split_once(':')?;
    let w: f64 = w.trim().parse().ok()?;
    let h: f64 = h.trim().parse().ok()?;
    (w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite()).then(|| w / h)
}
