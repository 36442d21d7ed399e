use crate::assets::DecodedImage;
use crate::foundation::core::{BezPath, Canvas, Point, Rect, Rgba8};
use crate::foundation::error::{AdsmithError, AdsmithResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;
use crate::geometry::TextMetrics;
use crate::render::encode_rgba8_png;
use crate::render::fonts::FontBook;
use crate::render::surface::{FontSpec, RasterSurface, TextBaseline, text_origin};
use std::sync::Arc;

/// Software surface backed by `vello_cpu`, shaping text through a [`FontBook`].
pub struct CpuSurface {
    canvas: Canvas,
    ctx: vello_cpu::RenderContext,
    fonts: FontBook,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("canvas", &self.canvas)
            .field("fonts", &self.fonts)
            .finish()
    }
}

impl CpuSurface {
    pub fn new(canvas: Canvas, fonts: FontBook) -> AdsmithResult<Self> {
        let (w, h) = canvas_u16(canvas)?;
        Ok(Self {
            canvas,
            ctx: vello_cpu::RenderContext::new(w, h),
            fonts,
        })
    }

    pub fn fonts(&self) -> &FontBook {
        &self.fonts
    }

    pub fn fonts_mut(&mut self) -> &mut FontBook {
        &mut self.fonts
    }

    fn draw_text(
        &mut self,
        text: &str,
        font: &FontSpec,
        anchor: Point,
        baseline: TextBaseline,
        color: Rgba8,
        stroke_width: Option<f64>,
    ) -> AdsmithResult<()> {
        let Some(shaped) = self.fonts.shape(text, font)? else {
            return Ok(());
        };
        if shaped.glyphs.is_empty() {
            return Ok(());
        }
        let origin = text_origin(anchor, baseline, shaped.metrics);
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
        self.ctx.set_paint(to_cpu_color(color));
        if let Some(w) = stroke_width {
            self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(w));
        }
        let run = self
            .ctx
            .glyph_run(&shaped.font)
            .font_size(shaped.font_size);
        if stroke_width.is_some() {
            run.stroke_glyphs(shaped.glyphs.into_iter());
        } else {
            run.fill_glyphs(shaped.glyphs.into_iter());
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }
}

impl RasterSurface for CpuSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn resize(&mut self, canvas: Canvas) -> AdsmithResult<()> {
        let (w, h) = canvas_u16(canvas)?;
        if self.ctx.width() == w && self.ctx.height() == h {
            self.ctx.reset();
        } else {
            self.ctx = vello_cpu::RenderContext::new(w, h);
        }
        self.canvas = canvas;
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(to_cpu_color(color));
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    fn draw_image(&mut self, image: &DecodedImage, dest: Rect) -> AdsmithResult<()> {
        let bounds = self.canvas.rect();
        let x0 = dest.x0.round().max(bounds.x0);
        let y0 = dest.y0.round().max(bounds.y0);
        let x1 = dest.x1.round().min(bounds.x1);
        let y1 = dest.y1.round().min(bounds.y1);
        if x1 <= x0 || y1 <= y0 {
            return Ok(());
        }
        let (w, h) = ((x1 - x0) as u32, (y1 - y0) as u32);

        let premul = image.to_premul_rgba8(w, h)?;
        let pixmap = pixmap_from_premul_bytes(&premul, w, h)?;
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };

        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((x0, y0)));
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(w),
            f64::from(h),
        ));
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }

    fn measure_text(&mut self, text: &str, font: &FontSpec) -> TextMetrics {
        self.fonts.measure(text, font)
    }

    fn fill_text(
        &mut self,
        text: &str,
        font: &FontSpec,
        anchor: Point,
        baseline: TextBaseline,
        color: Rgba8,
    ) -> AdsmithResult<()> {
        self.draw_text(text, font, anchor, baseline, color, None)
    }

    fn stroke_text(
        &mut self,
        text: &str,
        font: &FontSpec,
        anchor: Point,
        baseline: TextBaseline,
        color: Rgba8,
        width: f64,
    ) -> AdsmithResult<()> {
        self.draw_text(text, font, anchor, baseline, color, Some(width))
    }

    fn fill_path(&mut self, path: &BezPath, color: Rgba8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(to_cpu_color(color));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn stroke_path(&mut self, path: &BezPath, color: Rgba8, width: f64, dash: Option<[f64; 2]>) {
        let dashed;
        let path = match dash {
            Some(pattern) => {
                dashed = kurbo::dash(path.iter(), 0.0, &pattern).collect::<BezPath>();
                &dashed
            }
            None => path,
        };
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(to_cpu_color(color));
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    fn encode_png(&mut self) -> AdsmithResult<Vec<u8>> {
        let (w, h) = canvas_u16(self.canvas)?;
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        let mut rgba = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut rgba);
        encode_rgba8_png(self.canvas.width, self.canvas.height, rgba)
    }
}

fn canvas_u16(canvas: Canvas) -> AdsmithResult<(u16, u16)> {
    if canvas.is_empty() {
        return Err(AdsmithError::render("canvas width/height must be non-zero"));
    }
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| AdsmithError::render("canvas width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| AdsmithError::render("canvas height exceeds u16"))?;
    Ok((w, h))
}

fn to_cpu_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> AdsmithResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| AdsmithError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| AdsmithError::render("pixmap height exceeds u16"))?;
    if bytes.len() != (width as usize) * (height as usize) * 4 {
        return Err(AdsmithError::render("pixmap byte len mismatch"));
    }
    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(bytes.len() / 4);
    for px in bytes.chunks_exact(4) {
        may_have_opacities |= px[3] != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        });
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
