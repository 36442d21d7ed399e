use std::io::Cursor;

use super::*;

fn png_bytes(w: u32, h: u32, px: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(px));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_dimensions_and_premul_resample() {
    let decoded = decode_image(&png_bytes(2, 1, [100, 50, 200, 128])).unwrap();
    assert_eq!(decoded.dimensions(), (2, 1));

    let same = decoded.to_premul_rgba8(2, 1).unwrap();
    assert_eq!(&same[..4], &[50, 25, 100, 128]);

    let bigger = decoded.to_premul_rgba8(4, 3).unwrap();
    assert_eq!(bigger.len(), 4 * 3 * 4);
}

#[test]
fn decode_svg_by_content() {
    let svg = br##"<?xml version="1.0"?>
<svg xmlns="http://www.w3.org/2000/svg" width="10" height="20">
  <rect width="10" height="20" fill="#ff0000"/>
</svg>"##;
    let decoded = decode_image(svg).unwrap();
    assert!(matches!(decoded, DecodedImage::Vector(_)));
    assert_eq!(decoded.dimensions(), (10, 20));

    let px = decoded.to_premul_rgba8(5, 10).unwrap();
    assert_eq!(&px[..4], &[255, 0, 0, 255]);
}

#[test]
fn garbage_and_zero_sizes_are_errors() {
    assert!(decode_image(b"definitely not an image").is_err());
    assert!(decode_image(b"<svg").is_err());

    let decoded = decode_image(&png_bytes(1, 1, [0, 0, 0, 255])).unwrap();
    assert!(decoded.to_premul_rgba8(0, 5).is_err());
}
