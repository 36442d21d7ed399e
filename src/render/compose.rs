//! The per-variant drawing pipeline: background, image, text layers, CTA button.

use crate::assets::DecodedImage;
use crate::expand::{ConcreteText, Variant};
use crate::foundation::core::{Canvas, Point, Rect, Rgba8};
use crate::foundation::error::AdsmithResult;
use crate::geometry::{percent_to_px, rounded_rect_path, text_font_px, text_line_pitch};
use crate::model::{ButtonSpec, GroupId, ImageScaleSettings, TextPosition};
use crate::render::layout::{ButtonLayout, layout_button, place_image};
use crate::render::surface::{FontSpec, RasterSurface, TextBaseline};

/// First `top` text's distance from the canvas top.
pub const TOP_TEXT_START: f64 = 20.0;
/// Gap between the image's bottom edge and the first `bottom` text.
pub const BOTTOM_TEXT_GAP: f64 = 20.0;
/// White outline drawn behind every text layer.
pub const TEXT_OUTLINE_WIDTH: f64 = 3.0;

/// Everything needed to draw one variant at one size.
#[derive(Clone, Copy, Debug)]
pub struct RenderRequest<'a> {
    pub canvas: Canvas,
    /// `None` means "nothing to render yet".
    pub image: Option<&'a DecodedImage>,
    pub variant: &'a Variant,
    pub button: &'a ButtonSpec,
    pub scale: &'a ImageScaleSettings,
}

/// Where a text layer ended up.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedText {
    pub group: GroupId,
    pub position: TextPosition,
    pub anchor: Point,
    pub font_px: f64,
    pub width: f64,
}

impl PlacedText {
    /// Top-aligned box with the font size as line height.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.anchor.x - self.width / 2.0,
            self.anchor.y,
            self.anchor.x + self.width / 2.0,
            self.anchor.y + self.font_px,
        )
    }
}

/// Geometry of a drawn frame, for overlays and hit-testing.
#[derive(Clone, Debug, PartialEq)]
pub struct Composed {
    pub canvas: Canvas,
    pub image_rect: Option<Rect>,
    pub texts: Vec<PlacedText>,
    pub button: Option<ButtonLayout>,
}

impl Composed {
    pub fn text(&self, group: GroupId) -> Option<&PlacedText> {
        self.texts.iter().find(|t| t.group == group)
    }
}

/// Image bottom edge used for bottom texts and the default button position.
pub fn image_bottom(canvas: Canvas, image_rect: Option<Rect>) -> f64 {
    image_rect.map_or(canvas.height_f64() / 2.0, |r| r.y1)
}

/// Draw one variant. Returns `Ok(None)` without touching the surface when there is no image or
/// the canvas is empty.
#[tracing::instrument(skip_all, fields(width = req.canvas.width, height = req.canvas.height))]
pub fn compose<S: RasterSurface + ?Sized>(
    surface: &mut S,
    req: &RenderRequest<'_>,
) -> AdsmithResult<Option<Composed>> {
    let Some(image) = req.image else {
        return Ok(None);
    };
    if req.canvas.is_empty() {
        return Ok(None);
    }
    let canvas = req.canvas;
    let (w, h) = (canvas.width_f64(), canvas.height_f64());

    surface.resize(canvas)?;
    surface.fill_rect(canvas.rect(), Rgba8::WHITE);

    let (iw, ih) = image.dimensions();
    let image_rect = place_image(canvas, iw, ih, req.scale);
    if let Some(dest) = image_rect {
        surface.draw_image(image, dest)?;
    }
    let bottom = image_bottom(canvas, image_rect);

    let pitch = text_line_pitch(w);
    let mut placed = Vec::new();

    let tops = layer(&req.variant.texts, TextPosition::Top);
    for (i, t) in tops.enumerate() {
        let anchor = Point::new(w / 2.0, TOP_TEXT_START + i as f64 * pitch);
        placed.extend(draw_text_layer(surface, canvas, t, anchor)?);
    }

    let mut y = bottom + BOTTOM_TEXT_GAP;
    for t in layer(&req.variant.texts, TextPosition::Bottom) {
        placed.extend(draw_text_layer(surface, canvas, t, Point::new(w / 2.0, y))?);
        y += pitch;
    }

    for t in layer(&req.variant.texts, TextPosition::Custom) {
        let x = t.style.x.map_or(w / 2.0, |x| percent_to_px(x, w));
        let y = t.style.y.map_or(h / 4.0, |y| percent_to_px(y, h));
        placed.extend(draw_text_layer(surface, canvas, t, Point::new(x, y))?);
    }

    let button = layout_button(surface, canvas, req.button, &req.variant.cta_text, bottom);
    if let Some(b) = &button {
        let path = rounded_rect_path(
            b.rect.x0,
            b.rect.y0,
            b.rect.width(),
            b.rect.height(),
            b.radius,
        );
        surface.fill_path(&path, req.button.background_color);
        if b.font.is_drawable() {
            surface.fill_text(
                &b.label,
                &b.font,
                b.label_anchor(),
                TextBaseline::Middle,
                req.button.text_color,
            )?;
        }
    }

    Ok(Some(Composed {
        canvas,
        image_rect,
        texts: placed,
        button,
    }))
}

/// [`compose`] followed by PNG encoding.
pub fn render_png<S: RasterSurface + ?Sized>(
    surface: &mut S,
    req: &RenderRequest<'_>,
) -> AdsmithResult<Option<Vec<u8>>> {
    match compose(surface, req)? {
        Some(_) => surface.encode_png().map(Some),
        None => Ok(None),
    }
}

fn layer(texts: &[ConcreteText], position: TextPosition) -> impl Iterator<Item = &ConcreteText> {
    texts
        .iter()
        .filter(move |t| t.style.position == position && !t.text.trim().is_empty())
}

fn draw_text_layer<S: RasterSurface + ?Sized>(
    surface: &mut S,
    canvas: Canvas,
    text: &ConcreteText,
    anchor: Point,
) -> AdsmithResult<Option<PlacedText>> {
    let font_px = text_font_px(canvas.width_f64(), text.style.size_multiplier());
    let font = FontSpec::new(text.style.font.clone(), font_px).bold();
    if !font.is_drawable() {
        return Ok(None);
    }

    surface.stroke_text(
        &text.text,
        &font,
        anchor,
        TextBaseline::Top,
        Rgba8::WHITE,
        TEXT_OUTLINE_WIDTH,
    )?;
    surface.fill_text(&text.text, &font, anchor, TextBaseline::Top, text.style.color)?;

    let width = surface.measure_text(&text.text, &font).width;
    Ok(Some(PlacedText {
        group: text.group,
        position: text.style.position,
        anchor,
        font_px,
        width,
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
