use crate::foundation::core::{Canvas, Point, Rect};
use crate::foundation::math::clamp_lenient;
use crate::geometry::{button_font_px, percent_to_px};
use crate::model::{ButtonSpec, ImageScaleSettings};
use crate::render::surface::{FontSpec, RasterSurface};

/// Margin the CTA button keeps from every canvas edge.
pub const BUTTON_EDGE_MARGIN: f64 = 5.0;
/// Gap between the image's bottom edge and a default-positioned button.
pub const BUTTON_IMAGE_GAP: f64 = 50.0;

/// Where the source image lands on the canvas, centered.
///
/// Stretch ignores the source aspect ratio entirely and wins over a custom `W:H`. Otherwise the
/// image keeps its aspect (or the custom one) and is fit inside both ratio caps. Returns `None`
/// when nothing would be visible.
pub fn place_image(
    canvas: Canvas,
    source_width: u32,
    source_height: u32,
    scale: &ImageScaleSettings,
) -> Option<Rect> {
    if canvas.is_empty() || source_width == 0 || source_height == 0 {
        return None;
    }
    let (cw, ch) = (canvas.width_f64(), canvas.height_f64());
    let (wr, hr) = scale.caps();
    let (max_w, max_h) = (cw * wr, ch * hr);

    let (w, h) = if scale.is_stretch() {
        (max_w, max_h)
    } else {
        let aspect = scale
            .custom_aspect()
            .unwrap_or(f64::from(source_width) / f64::from(source_height));
        let mut w = max_w;
        let mut h = w / aspect;
        if h > max_h {
            h = max_h;
            w = h * aspect;
        }
        (w, h)
    };

    if !(w > 0.0 && h > 0.0) {
        return None;
    }
    let x = (cw - w) / 2.0;
    let y = (ch - h) / 2.0;
    Some(Rect::new(x, y, x + w, y + h))
}

/// Resolved geometry of the CTA button for one label.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonLayout {
    pub label: String,
    pub rect: Rect,
    pub font: FontSpec,
    pub radius: f64,
}

impl ButtonLayout {
    /// Label anchor; the label is drawn middle-aligned here.
    pub fn label_anchor(&self) -> Point {
        self.rect.center()
    }
}

/// Measure and place the CTA button, `None` for a blank label.
///
/// Shared by the compositor and the drag hit-test so both agree on the button's box.
pub fn layout_button<S: RasterSurface + ?Sized>(
    surface: &mut S,
    canvas: Canvas,
    button: &ButtonSpec,
    label: &str,
    image_bottom: f64,
) -> Option<ButtonLayout> {
    if label.trim().is_empty() || canvas.is_empty() {
        return None;
    }
    let (w, h) = (canvas.width_f64(), canvas.height_f64());
    let mult = button.size_multiplier();
    let font = FontSpec::new(button.font.clone(), button_font_px(w, mult)).bold();

    let text_width = if font.is_drawable() {
        surface.measure_text(label, &font).width
    } else {
        0.0
    };
    let padding = 12.0 * mult;
    let bw = text_width + padding * 2.0;
    let bh = font.size_px + padding * 1.5;

    let (x, y) = match button.position() {
        Some(p) => (
            percent_to_px(p.x, w) - bw / 2.0,
            percent_to_px(p.y, h) - bh / 2.0,
        ),
        None => (
            (w - bw) / 2.0,
            (image_bottom + BUTTON_IMAGE_GAP).min(h - bh - BUTTON_IMAGE_GAP),
        ),
    };
    let x = clamp_lenient(x, BUTTON_EDGE_MARGIN, w - bw - BUTTON_EDGE_MARGIN);
    let y = clamp_lenient(y, BUTTON_EDGE_MARGIN, h - bh - BUTTON_EDGE_MARGIN);

    Some(ButtonLayout {
        label: label.to_string(),
        rect: Rect::new(x, y, x + bw, y + bh),
        font,
        radius: button.radius_px() * mult,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/layout.rs"]
mod tests;
