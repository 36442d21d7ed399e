use crate::foundation::core::Rgba8;
use crate::foundation::math::finite_or_one;
use crate::geometry::PercentPoint;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FONT: &str = "Arial, sans-serif";

/// Opaque, session-unique text group identifier.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GroupId(pub u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPosition {
    Top,
    Bottom,
    #[default]
    Custom,
}

/// Styling shared by every option of a text group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub color: Rgba8,
    pub font: String,
    pub position: TextPosition,
    /// Percentage of canvas width; only consulted for `custom` placement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Percentage of canvas height; only consulted for `custom` placement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Rgba8::BLACK,
            font: DEFAULT_FONT.to_string(),
            position: TextPosition::Custom,
            x: Some(50.0),
            y: Some(30.0),
            size: Some(1.0),
        }
    }
}

impl TextStyle {
    /// Size multiplier, `1` when absent. No range is assumed.
    pub fn size_multiplier(&self) -> f64 {
        finite_or_one(self.size.unwrap_or(1.0))
    }

    /// Point used by the drag hit-test; missing coordinates count as the canvas center.
    pub fn hit_anchor(&self) -> PercentPoint {
        PercentPoint::new(self.x.unwrap_or(50.0), self.y.unwrap_or(50.0))
    }
}

/// A user-defined set of alternative strings sharing one style.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextGroup {
    pub id: GroupId,
    /// Never empty while editing; blank entries are skipped by the expander.
    pub options: Vec<String>,
    #[serde(flatten)]
    pub style: TextStyle,
}

impl TextGroup {
    pub fn new(id: GroupId) -> Self {
        Self {
            id,
            options: vec![String::new()],
            style: TextStyle::default(),
        }
    }

    /// Options that take part in cartesian expansion, in insertion order.
    pub fn expandable_options(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .map(String::as_str)
            .filter(|o| !o.trim().is_empty())
    }
}

/// Partial style update; `None` leaves the field as is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStylePatch {
    pub color: Option<Rgba8>,
    pub font: Option<String>,
    pub position: Option<TextPosition>,
    pub size: Option<f64>,
}

impl TextStylePatch {
    pub(crate) fn apply_to(&self, style: &mut TextStyle) {
        if let Some(c) = self.color {
            style.color = c;
        }
        if let Some(f) = &self.font {
            style.font = f.clone();
        }
        if let Some(p) = self.position {
            style.position = p;
        }
        if let Some(s) = self.size {
            style.size = Some(s);
        }
    }
}
