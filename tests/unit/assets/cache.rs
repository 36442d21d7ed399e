use std::io::Cursor;

use super::*;
use crate::model::{SourceImage, UploadMode};

fn png(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([1, 2, 3, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn caches_per_revision_and_reports_failures() {
    let mut images = SourceImages::default();
    images.upload(
        vec![
            SourceImage::new("ok.png", png(3, 2)),
            SourceImage::new("bad.png", b"nope".to_vec()),
        ],
        UploadMode::Append,
    );

    let mut cache = ImageCache::new();
    let a = cache.get(&images, 0).unwrap().unwrap();
    let b = cache.get(&images, 0).unwrap().unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(a.dimensions(), (3, 2));

    let err = cache.get(&images, 1).unwrap_err();
    assert!(matches!(err, AdsmithError::Render(_)));
    assert!(err.to_string().contains("bad.png"));

    assert!(cache.get(&images, 7).unwrap().is_none());

    images.upload(vec![SourceImage::new("new.png", png(5, 5))], UploadMode::Replace);
    let c = cache.get(&images, 0).unwrap().unwrap();
    assert_eq!(c.dimensions(), (5, 5));
}
