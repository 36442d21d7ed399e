use crate::assets::ImageCache;
use crate::expand::{Variant, expand_model};
use crate::foundation::core::{BezPath, Canvas, Point, Rect, Rgba8};
use crate::foundation::error::{AdsmithError, AdsmithResult};
use crate::geometry::{ViewRect, inflate, rounded_rect_path};
use crate::model::OptionModel;
use crate::preview::drag::{Cursor, DragController, DragState, DragTarget, hit_test};
use crate::render::compose::image_bottom;
use crate::render::{Composed, RasterSurface, RenderRequest, compose, layout_button, place_image};
use kurbo::Shape;

/// Preview size when no platform is selected.
pub const FALLBACK_CANVAS: Canvas = Canvas::new(800, 600);

pub const TEXT_OVERLAY_COLOR: Rgba8 = Rgba8::rgb(0x3b, 0x82, 0xf6);
pub const BUTTON_OVERLAY_COLOR: Rgba8 = Rgba8::rgb(0xf5, 0x9e, 0x0b);
const OVERLAY_DASH: [f64; 2] = [5.0, 3.0];
const OVERLAY_LINE_WIDTH: f64 = 2.0;

/// Size the preview renders at: the preview platform, else [`FALLBACK_CANVAS`].
pub fn preview_canvas(model: &OptionModel) -> Canvas {
    model
        .preview_platform()
        .map_or(FALLBACK_CANVAS, |p| p.canvas())
}

/// The last drawn preview.
#[derive(Clone, Debug)]
pub struct PreviewFrame {
    pub composed: Composed,
    pub png: Vec<u8>,
}

/// Live preview plus the drag protocol driving it.
///
/// General model edits go through [`PreviewLoop::notify_change`], which is a no-op (marking the
/// frame stale) while a drag is active or the loop is suspended for a batch. Pointer handlers
/// redraw directly instead.
pub struct PreviewLoop<S: RasterSurface> {
    surface: S,
    cache: ImageCache,
    drag: DragController,
    view: Option<ViewRect>,
    variant_index: usize,
    suspended: bool,
    stale: bool,
    frame: Option<PreviewFrame>,
    last_error: Option<String>,
}

impl<S: RasterSurface> PreviewLoop<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            cache: ImageCache::new(),
            drag: DragController::new(),
            view: None,
            variant_index: 0,
            suspended: false,
            stale: false,
            frame: None,
            last_error: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn frame(&self) -> Option<&PreviewFrame> {
        self.frame.as_ref()
    }

    /// Why the last redraw produced no frame, if it failed.
    pub fn render_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    pub fn cursor(&self, model: &OptionModel) -> Cursor {
        self.drag.cursor(&model.text_groups)
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// A change arrived while redraws were held back.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// On-screen placement of the canvas; defaults to the raster size at the origin.
    pub fn set_view(&mut self, view: ViewRect) {
        self.view = Some(view);
    }

    /// Which expanded variant the preview shows (clamped to the variant count).
    pub fn set_variant_index(&mut self, index: usize) {
        self.variant_index = index;
    }

    pub fn sample_variant(&self, model: &OptionModel) -> Variant {
        let variants = expand_model(model);
        let i = self.variant_index.min(variants.len().saturating_sub(1));
        variants.into_iter().nth(i).unwrap_or_default()
    }

    /// Redraw now, regardless of drag or suspension.
    ///
    /// A source image or layout that cannot be rendered leaves no frame and is reported through
    /// [`PreviewLoop::render_error`]; only non-render failures are returned.
    #[tracing::instrument(skip_all)]
    pub fn refresh(&mut self, model: &OptionModel) -> AdsmithResult<Option<&PreviewFrame>> {
        self.stale = false;
        self.redraw(model)?;
        Ok(self.frame.as_ref())
    }

    /// Listener for general option-model edits. Returns whether a redraw happened.
    pub fn notify_change(&mut self, model: &OptionModel) -> AdsmithResult<bool> {
        if self.suspended || self.drag.is_dragging() {
            self.stale = true;
            return Ok(false);
        }
        self.refresh(model)?;
        Ok(true)
    }

    pub fn suspend(&mut self) {
        self.suspended = true;
    }

    /// Lift a suspension, catching up on edits that arrived meanwhile.
    pub fn resume(&mut self, model: &OptionModel) -> AdsmithResult<()> {
        self.suspended = false;
        if self.stale {
            self.refresh(model)?;
        }
        Ok(())
    }

    /// Hit-test and possibly start a drag. Returns what was grabbed.
    pub fn pointer_down(
        &mut self,
        model: &OptionModel,
        client_x: f64,
        client_y: f64,
    ) -> AdsmithResult<Option<DragTarget>> {
        if self.suspended || self.drag.is_dragging() {
            return Ok(None);
        }
        let image = match self.cache.get(&model.images, model.images.current_index()) {
            Ok(Some(image)) => image,
            Ok(None) => return Ok(None),
            Err(AdsmithError::Render(msg)) => {
                tracing::debug!("nothing to grab, preview image unavailable: {msg}");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        let canvas = preview_canvas(model);
        let point = self.view_for(canvas).client_to_percent(client_x, client_y);

        let variant = self.sample_variant(model);
        let (iw, ih) = image.dimensions();
        let bottom = image_bottom(canvas, place_image(canvas, iw, ih, &model.image_scale));
        let button = layout_button(
            &mut self.surface,
            canvas,
            &model.button,
            &variant.cta_text,
            bottom,
        )
        .map(|b| b.rect);

        let Some(target) = hit_test(point, canvas, button, &model.text_groups) else {
            return Ok(None);
        };
        self.drag.begin(target);
        tracing::debug!(?target, x = point.x, y = point.y, "drag started");
        self.redraw(model)?;
        Ok(Some(target))
    }

    /// Move the dragged entity, writing its clamped position into `model`.
    pub fn pointer_move(
        &mut self,
        model: &mut OptionModel,
        client_x: f64,
        client_y: f64,
    ) -> AdsmithResult<bool> {
        if !self.drag.is_dragging() {
            return Ok(false);
        }
        let canvas = preview_canvas(model);
        let point = self.view_for(canvas).client_to_percent(client_x, client_y);
        let Some(update) = self.drag.update(point) else {
            return Ok(false);
        };
        model.apply(update)?;
        self.redraw(model)?;
        Ok(true)
    }

    /// Finish the drag at its last position.
    pub fn pointer_up(&mut self, model: &mut OptionModel) -> AdsmithResult<bool> {
        if !self.drag.is_dragging() {
            return Ok(false);
        }
        if let Some(update) = self.drag.end() {
            model.apply(update)?;
        }
        tracing::debug!("drag finished");
        self.notify_change(model)?;
        Ok(true)
    }

    /// Leaving the canvas ends an active drag exactly like releasing the pointer.
    pub fn pointer_leave(&mut self, model: &mut OptionModel) -> AdsmithResult<bool> {
        self.pointer_up(model)
    }

    fn view_for(&self, canvas: Canvas) -> ViewRect {
        self.view.unwrap_or(ViewRect::new(
            0.0,
            0.0,
            canvas.width_f64(),
            canvas.height_f64(),
        ))
    }

    fn redraw(&mut self, model: &OptionModel) -> AdsmithResult<()> {
        match self.draw_frame(model) {
            Ok(frame) => {
                self.frame = frame;
                self.last_error = None;
                Ok(())
            }
            Err(AdsmithError::Render(msg)) => {
                tracing::warn!("preview not rendered: {msg}");
                self.frame = None;
                self.last_error = Some(msg);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn draw_frame(&mut self, model: &OptionModel) -> AdsmithResult<Option<PreviewFrame>> {
        let canvas = preview_canvas(model);
        let variant = self.sample_variant(model);
        let image = self.cache.get(&model.images, model.images.current_index())?;
        let req = RenderRequest {
            canvas,
            image: image.as_deref(),
            variant: &variant,
            button: &model.button,
            scale: &model.image_scale,
        };
        let Some(composed) = compose(&mut self.surface, &req)? else {
            return Ok(None);
        };
        self.draw_overlay(&composed);
        let png = self.surface.encode_png()?;
        Ok(Some(PreviewFrame { composed, png }))
    }

    fn draw_overlay(&mut self, composed: &Composed) {
        match self.drag.state() {
            DragState::Idle => {}
            DragState::DraggingText { group, .. } => {
                let Some(t) = composed.text(group) else {
                    return;
                };
                let selection = inflate(t.bounds(), 10.0, 5.0);
                self.surface.stroke_path(
                    &rect_path(selection),
                    TEXT_OVERLAY_COLOR,
                    OVERLAY_LINE_WIDTH,
                    Some(OVERLAY_DASH),
                );
                self.surface.fill_path(
                    &circle_path(Point::new(t.anchor.x, t.anchor.y + 10.0), 5.0),
                    TEXT_OVERLAY_COLOR,
                );
            }
            DragState::DraggingButton { .. } => {
                let Some(b) = &composed.button else {
                    return;
                };
                self.surface.stroke_path(
                    &rect_path(inflate(b.rect, 3.0, 3.0)),
                    BUTTON_OVERLAY_COLOR,
                    OVERLAY_LINE_WIDTH,
                    Some(OVERLAY_DASH),
                );
                self.surface.fill_path(
                    &circle_path(Point::new(b.rect.center().x, b.rect.y1 + 8.0), 4.0),
                    BUTTON_OVERLAY_COLOR,
                );
            }
        }
    }
}

fn rect_path(r: Rect) -> BezPath {
    rounded_rect_path(r.x0, r.y0, r.width(), r.height(), 0.0)
}

fn circle_path(center: Point, radius: f64) -> BezPath {
    kurbo::Circle::new(center, radius).to_path(0.1)
}

#[cfg(test)]
#[path = "../../tests/unit/preview/session.rs"]
mod tests;
