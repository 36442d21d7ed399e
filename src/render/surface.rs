use crate::assets::DecodedImage;
use crate::foundation::core::{BezPath, Canvas, Point, Rect, Rgba8};
use crate::foundation::error::AdsmithResult;
use crate::geometry::TextMetrics;

/// Font request as the compositor phrases it: a CSS-style family list plus a pixel size.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size_px: f64,
    pub bold: bool,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size_px: f64) -> Self {
        Self {
            family: family.into(),
            size_px,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Glyphs can only be drawn at a finite, positive size.
    pub fn is_drawable(&self) -> bool {
        self.size_px.is_finite() && self.size_px > 0.0
    }
}

/// Vertical alignment of a text run relative to its anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    /// The anchor is the top edge of the line box.
    Top,
    /// The anchor is the vertical middle of the line box.
    Middle,
}

/// 2D drawing target the compositor renders through.
///
/// Text is always centered horizontally on its anchor. Colors are straight (non-premultiplied)
/// RGBA. Implementations must start every frame from a fully transparent canvas after
/// [`RasterSurface::resize`].
pub trait RasterSurface {
    fn canvas(&self) -> Canvas;

    /// Set the target size and discard everything drawn so far.
    fn resize(&mut self, canvas: Canvas) -> AdsmithResult<()>;

    fn fill_rect(&mut self, rect: Rect, color: Rgba8);

    /// Draw `image` scaled to exactly fill `dest`.
    fn draw_image(&mut self, image: &DecodedImage, dest: Rect) -> AdsmithResult<()>;

    fn measure_text(&mut self, text: &str, font: &FontSpec) -> TextMetrics;

    fn fill_text(
        &mut self,
        text: &str,
        font: &FontSpec,
        anchor: Point,
        baseline: TextBaseline,
        color: Rgba8,
    ) -> AdsmithResult<()>;

    fn stroke_text(
        &mut self,
        text: &str,
        font: &FontSpec,
        anchor: Point,
        baseline: TextBaseline,
        color: Rgba8,
        width: f64,
    ) -> AdsmithResult<()>;

    fn fill_path(&mut self, path: &BezPath, color: Rgba8);

    /// `dash` is `[on, off]` in pixels.
    fn stroke_path(&mut self, path: &BezPath, color: Rgba8, width: f64, dash: Option<[f64; 2]>);

    /// Encode the current frame as PNG with exactly the canvas dimensions.
    fn encode_png(&mut self) -> AdsmithResult<Vec<u8>>;
}

/// Top-left corner of a text box of `metrics` anchored per [`TextBaseline`], centered on
/// `anchor.x`.
pub fn text_origin(anchor: Point, baseline: TextBaseline, metrics: TextMetrics) -> Point {
    let y = match baseline {
        TextBaseline::Top => anchor.y,
        TextBaseline::Middle => anchor.y - metrics.height / 2.0,
    };
    Point::new(anchor.x - metrics.width / 2.0, y)
}

/// Box covered by a text run, used for overlays and hit boxes.
pub fn text_box(anchor: Point, baseline: TextBaseline, metrics: TextMetrics) -> Rect {
    let o = text_origin(anchor, baseline, metrics);
    Rect::new(o.x, o.y, o.x + metrics.width, o.y + metrics.height)
}
