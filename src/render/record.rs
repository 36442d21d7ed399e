use crate::assets::DecodedImage;
use crate::foundation::core::{BezPath, Canvas, Point, Rect, Rgba8};
use crate::foundation::error::{AdsmithError, AdsmithResult};
use crate::geometry::TextMetrics;
use crate::render::encode_rgba8_png;
use crate::render::surface::{FontSpec, RasterSurface, TextBaseline};
use kurbo::Shape;

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Rgba8,
    },
    DrawImage {
        dest: Rect,
        source_size: (u32, u32),
    },
    FillText {
        text: String,
        font: FontSpec,
        anchor: Point,
        baseline: TextBaseline,
        color: Rgba8,
    },
    StrokeText {
        text: String,
        font: FontSpec,
        anchor: Point,
        baseline: TextBaseline,
        color: Rgba8,
        width: f64,
    },
    FillPath {
        bounds: Rect,
        color: Rgba8,
    },
    StrokePath {
        bounds: Rect,
        color: Rgba8,
        width: f64,
        dash: Option<[f64; 2]>,
    },
}

/// Display-list backend with deterministic text metrics.
///
/// Encodes a blank PNG of the canvas size, so batch plumbing can run without a rasterizer.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    canvas: Canvas,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Filled text runs in draw order.
    pub fn filled_texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl RasterSurface for RecordingSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn resize(&mut self, canvas: Canvas) -> AdsmithResult<()> {
        self.canvas = canvas;
        self.ops.clear();
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn draw_image(&mut self, image: &DecodedImage, dest: Rect) -> AdsmithResult<()> {
        self.ops.push(DrawOp::DrawImage {
            dest,
            source_size: image.dimensions(),
        });
        Ok(())
    }

    fn measure_text(&mut self, text: &str, font: &FontSpec) -> TextMetrics {
        TextMetrics::approximate(text, font.size_px)
    }

    fn fill_text(
        &mut self,
        text: &str,
        font: &FontSpec,
        anchor: Point,
        baseline: TextBaseline,
        color: Rgba8,
    ) -> AdsmithResult<()> {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            font: font.clone(),
            anchor,
            baseline,
            color,
        });
        Ok(())
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
        self.ops.push(DrawOp::StrokeText {
            text: text.to_string(),
            font: font.clone(),
            anchor,
            baseline,
            color,
            width,
        });
        Ok(())
    }

    fn fill_path(&mut self, path: &BezPath, color: Rgba8) {
        self.ops.push(DrawOp::FillPath {
            bounds: path.bounding_box(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, color: Rgba8, width: f64, dash: Option<[f64; 2]>) {
        self.ops.push(DrawOp::StrokePath {
            bounds: path.bounding_box(),
            color,
            width,
            dash,
        });
    }

    fn encode_png(&mut self) -> AdsmithResult<Vec<u8>> {
        if self.canvas.is_empty() {
            return Err(AdsmithError::render("cannot encode an empty canvas"));
        }
        let len = (self.canvas.width as usize) * (self.canvas.height as usize) * 4;
        encode_rgba8_png(self.canvas.width, self.canvas.height, vec![0u8; len])
    }
}
