use crate::foundation::error::{AdsmithError, AdsmithResult};
use crate::foundation::math::premultiply_rgba8_in_place;
use anyhow::Context;
use std::sync::Arc;

/// Largest side a vector source is rasterized at.
const MAX_RASTER_SIDE: u32 = 16_384;

/// A decoded source image, ready to be resampled to any placement size.
#[derive(Clone)]
pub enum DecodedImage {
    Raster(Arc<image::RgbaImage>),
    Vector(Arc<usvg::Tree>),
}

impl std::fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (w, h) = self.dimensions();
        match self {
            Self::Raster(_) => write!(f, "DecodedImage::Raster({w}x{h})"),
            Self::Vector(_) => write!(f, "DecodedImage::Vector({w}x{h})"),
        }
    }
}

impl DecodedImage {
    /// Intrinsic size in pixels (vector sources are rounded up).
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Raster(img) => img.dimensions(),
            Self::Vector(tree) => {
                let size = tree.size();
                (
                    (size.width().ceil() as u32).max(1),
                    (size.height().ceil() as u32).max(1),
                )
            }
        }
    }

    /// Resample to exactly `width`x`height` and return premultiplied RGBA8 bytes.
    pub fn to_premul_rgba8(&self, width: u32, height: u32) -> AdsmithResult<Vec<u8>> {
        if width == 0 || height == 0 {
            return Err(AdsmithError::render("image target size must be non-zero"));
        }
        match self {
            Self::Raster(img) => {
                let resized = if img.dimensions() == (width, height) {
                    img.as_ref().clone()
                } else {
                    image::imageops::resize(
                        img.as_ref(),
                        width,
                        height,
                        image::imageops::FilterType::Triangle,
                    )
                };
                let mut bytes = resized.into_raw();
                premultiply_rgba8_in_place(&mut bytes);
                Ok(bytes)
            }
            Self::Vector(tree) => rasterize_svg_to_premul_rgba8(tree, width, height),
        }
    }
}

/// Decode an uploaded payload. SVG documents are detected by content, everything else goes
/// through `image`'s format sniffing.
pub fn decode_image(bytes: &[u8]) -> AdsmithResult<DecodedImage> {
    if looks_like_svg(bytes) {
        let opts = usvg::Options::default();
        let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
        return Ok(DecodedImage::Vector(Arc::new(tree)));
    }
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(DecodedImage::Raster(Arc::new(dyn_img.to_rgba8())))
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(512)];
    let Ok(text) = std::str::from_utf8(head) else {
        return false;
    };
    let text = text.trim_start_matches('\u{feff}').trim_start();
    text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg"))
}

fn rasterize_svg_to_premul_rgba8(
    tree: &usvg::Tree,
    width: u32,
    height: u32,
) -> AdsmithResult<Vec<u8>> {
    if width > MAX_RASTER_SIDE || height > MAX_RASTER_SIDE {
        return Err(AdsmithError::render(format!(
            "svg raster size too large: {width}x{height} (max {MAX_RASTER_SIDE}x{MAX_RASTER_SIDE})"
        )));
    }
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| AdsmithError::render("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().to_vec())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
