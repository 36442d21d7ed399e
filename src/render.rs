pub mod compose;
pub mod cpu;
pub mod fonts;
pub mod layout;
pub mod record;
pub mod surface;

pub use compose::{Composed, PlacedText, RenderRequest, compose, render_png};
pub use cpu::CpuSurface;
pub use fonts::{FontBook, ShapedText};
pub use layout::{ButtonLayout, layout_button, place_image};
pub use record::{DrawOp, RecordingSurface};
pub use surface::{FontSpec, RasterSurface, TextBaseline, text_box, text_origin};

use crate::foundation::error::AdsmithResult;
use anyhow::Context;
use std::io::Cursor;

/// Encode straight-alpha RGBA8 rows as PNG.
pub(crate) fn encode_rgba8_png(width: u32, height: u32, rgba: Vec<u8>) -> AdsmithResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(width, height, rgba)
        .context("png buffer does not match canvas size")?;
    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(out)
}
