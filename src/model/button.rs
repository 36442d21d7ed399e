use crate::foundation::core::Rgba8;
use crate::foundation::math::finite_or_one;
use crate::geometry::PercentPoint;
use crate::model::text::DEFAULT_FONT;
use serde::{Deserialize, Serialize};

/// Radius used when the configured border radius cannot be parsed.
pub const FALLBACK_RADIUS_PX: f64 = 8.0;

/// The single call-to-action button governing every variant. Only its label varies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonSpec {
    pub text_options: Vec<String>,
    pub background_color: Rgba8,
    pub text_color: Rgba8,
    /// CSS-style pixel length, e.g. `"8px"`.
    pub border_radius: String,
    /// Kept for template fidelity; the renderer derives padding from the size multiplier.
    pub padding: String,
    pub font: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

impl Default for ButtonSpec {
    fn default() -> Self {
        Self {
            text_options: vec!["Shop Now".to_string()],
            background_color: Rgba8::rgb(0x3b, 0x82, 0xf6),
            text_color: Rgba8::WHITE,
            border_radius: "8px".to_string(),
            padding: "12px 24px".to_string(),
            font: DEFAULT_FONT.to_string(),
            x: Some(50.0),
            y: Some(75.0),
            size: Some(1.0),
        }
    }
}

impl ButtonSpec {
    pub fn size_multiplier(&self) -> f64 {
        finite_or_one(self.size.unwrap_or(1.0))
    }

    /// Labels that take part in cartesian expansion, in insertion order.
    pub fn expandable_options(&self) -> impl Iterator<Item = &str> {
        self.text_options
            .iter()
            .map(String::as_str)
            .filter(|o| !o.trim().is_empty())
    }

    /// Custom center point, only when both coordinates are present.
    pub fn position(&self) -> Option<PercentPoint> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some(PercentPoint::new(x, y)),
            _ => None,
        }
    }

    /// Unscaled corner radius in pixels.
    pub fn radius_px(&self) -> f64 {
        parse_px(&self.border_radius).unwrap_or(FALLBACK_RADIUS_PX)
    }
}

/// Parse the leading number of a CSS length (`"8px"`, `" 4.5 px"`, `"12"`).
pub fn parse_px(s: &str) -> Option<f64> {
    let s = s.trim();
    let end = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map_or(s.len(), |(i, _)| i);
    let v: f64 = s[..end].parse().ok()?;
    v.is_finite().then_some(v)
}

/// Partial button update; `None` leaves the field as is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStylePatch {
    pub background_color: Option<Rgba8>,
    pub text_color: Option<Rgba8>,
    pub border_radius: Option<String>,
    pub font: Option<String>,
    pub size: Option<f64>,
}

impl ButtonStylePatch {
    pub(crate) fn apply_to(&self, button: &mut ButtonSpec) {
        if let Some(c) = self.background_color {
            button.background_color = c;
        }
        if let Some(c) = self.text_color {
            button.text_color = c;
        }
        if let Some(r) = &self.border_radius {
            button.border_radius = r.clone();
        }
        if let Some(f) = &self.font {
            button.font = f.clone();
        }
        if let Some(s) = self.size {
            button.size = Some(s);
        }
    }
}
