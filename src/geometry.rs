//! Geometry and drawing primitives shared by the renderer and the drag protocol.

use crate::foundation::core::{BezPath, Point, Rect};

/// Advance per character (in em) used when no font face is available.
pub const APPROX_ADVANCE_EM: f64 = 0.6;

/// Build a closed rounded-rectangle path.
///
/// `radius` is clamped to `min(width, height) / 2`. A clamped radius `<= 0` (or NaN) yields a
/// plain four-corner rectangle.
pub fn rounded_rect_path(x: f64, y: f64, width: f64, height: f64, radius: f64) -> BezPath {
    let max_radius = (width / 2.0).min(height / 2.0);
    let r = radius.min(max_radius);

    let mut path = BezPath::new();
    if r.is_nan() || r <= 0.0 {
        path.move_to((x, y));
        path.line_to((x + width, y));
        path.line_to((x + width, y + height));
        path.line_to((x, y + height));
        path.close_path();
        return path;
    }

    path.move_to((x + r, y));
    path.line_to((x + width - r, y));
    path.quad_to((x + width, y), (x + width, y + r));
    path.line_to((x + width, y + height - r));
    path.quad_to((x + width, y + height), (x + width - r, y + height));
    path.line_to((x + r, y + height));
    path.quad_to((x, y + height), (x, y + height - r));
    path.line_to((x, y + r));
    path.quad_to((x, y), (x + r, y));
    path.close_path();
    path
}

/// `pixel = percent / 100 * dimension`. Callers clamp drag input before mapping.
pub fn percent_to_px(percent: f64, dimension: f64) -> f64 {
    (percent / 100.0) * dimension
}

pub fn px_to_percent(px: f64, dimension: f64) -> f64 {
    if dimension <= 0.0 {
        return 0.0;
    }
    (px / dimension) * 100.0
}

pub fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) }
}

/// Position in percentage units of the canvas (0..=100 on each axis when clamped).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PercentPoint {
    pub x: f64,
    pub y: f64,
}

impl PercentPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn clamped(self) -> Self {
        Self {
            x: clamp_percent(self.x),
            y: clamp_percent(self.y),
        }
    }

    pub fn distance(self, other: Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn to_px(self, width: f64, height: f64) -> Point {
        Point::new(percent_to_px(self.x, width), percent_to_px(self.y, height))
    }
}

/// The on-screen rectangle a preview canvas occupies, in client (pointer) coordinates.
///
/// The displayed size may differ from the raster size (CSS scaling), which is why pointer input
/// is mapped through percentages rather than pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Unclamped canvas-relative percentages for a client coordinate.
    pub fn client_to_percent(&self, client_x: f64, client_y: f64) -> PercentPoint {
        PercentPoint::new(
            px_to_percent(client_x - self.left, self.width),
            px_to_percent(client_y - self.top, self.height),
        )
    }
}

/// Measured extent of a single line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
}

impl TextMetrics {
    /// Metric used when no font data is available: a fixed advance per character and a line
    /// height equal to the font size.
    pub fn approximate(text: &str, size_px: f64) -> Self {
        let chars = text.chars().count() as f64;
        Self {
            width: chars * size_px * APPROX_ADVANCE_EM,
            height: size_px,
        }
    }
}

/// Font size for text layers: `max(canvas_width * 0.04, 20) * multiplier`.
pub fn text_font_px(canvas_width: f64, multiplier: f64) -> f64 {
    (canvas_width * 0.04).max(20.0) * multiplier
}

/// Vertical pitch between stacked `top`/`bottom` text layers.
pub fn text_line_pitch(canvas_width: f64) -> f64 {
    (canvas_width * 0.05).max(25.0)
}

/// Font size for the CTA label: `max(canvas_width * 0.035, 18) * multiplier`.
pub fn button_font_px(canvas_width: f64, multiplier: f64) -> f64 {
    (canvas_width * 0.035).max(18.0) * multiplier
}

/// Grow `rect` by `dx` horizontally and `dy` vertically on every side.
pub fn inflate(rect: Rect, dx: f64, dy: f64) -> Rect {
    Rect::new(rect.x0 - dx, rect.y0 - dy, rect.x1 + dx, rect.y1 + dy)
}

#[cfg(test)]
#[path = "../tests/unit/geometry.rs"]
mod tests;
