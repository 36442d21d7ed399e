use super::*;
use crate::geometry::rounded_rect_path;

fn decode_png(bytes: &[u8]) -> image::RgbaImage {
    image::load_from_memory(bytes).unwrap().to_rgba8()
}

fn surface(w: u32, h: u32) -> CpuSurface {
    CpuSurface::new(Canvas::new(w, h), FontBook::new()).unwrap()
}

#[test]
fn rejects_empty_and_oversized_canvases() {
    assert!(CpuSurface::new(Canvas::new(0, 10), FontBook::new()).is_err());
    assert!(CpuSurface::new(Canvas::new(70_000, 10), FontBook::new()).is_err());
    let mut s = surface(4, 4);
    assert!(s.resize(Canvas::new(10, 70_000)).is_err());
}

#[test]
fn fill_rect_and_encode_exact_size() {
    let mut s = surface(8, 6);
    s.fill_rect(s.canvas().rect(), Rgba8::WHITE);
    s.fill_rect(Rect::new(0.0, 0.0, 4.0, 6.0), Rgba8::rgb(255, 0, 0));
    let png = decode_png(&s.encode_png().unwrap());
    assert_eq!(png.dimensions(), (8, 6));
    assert_eq!(png.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(png.get_pixel(7, 5).0, [255, 255, 255, 255]);
}

#[test]
fn resize_discards_previous_frame() {
    let mut s = surface(4, 4);
    s.fill_rect(s.canvas().rect(), Rgba8::BLACK);
    s.resize(Canvas::new(4, 4)).unwrap();
    let png = decode_png(&s.encode_png().unwrap());
    assert_eq!(png.get_pixel(1, 1).0[3], 0);

    s.resize(Canvas::new(6, 2)).unwrap();
    assert_eq!(decode_png(&s.encode_png().unwrap()).dimensions(), (6, 2));
}

#[test]
fn draw_image_fills_destination() {
    let src = image::RgbaImage::from_pixel(3, 3, image::Rgba([0, 0, 255, 255]));
    let img = DecodedImage::Raster(Arc::new(src));
    let mut s = surface(20, 10);
    s.fill_rect(s.canvas().rect(), Rgba8::WHITE);
    s.draw_image(&img, Rect::new(0.0, 0.0, 20.0, 10.0)).unwrap();
    let png = decode_png(&s.encode_png().unwrap());
    for (x, y) in [(0, 0), (19, 0), (0, 9), (19, 9), (10, 5)] {
        assert_eq!(png.get_pixel(x, y).0, [0, 0, 255, 255], "pixel {x},{y}");
    }
}

#[test]
fn rounded_rect_fill_leaves_corners_clear() {
    let mut s = surface(40, 40);
    s.fill_rect(s.canvas().rect(), Rgba8::WHITE);
    s.fill_path(&rounded_rect_path(0.0, 0.0, 40.0, 40.0, 16.0), Rgba8::rgb(0, 128, 0));
    s.stroke_path(
        &rounded_rect_path(4.0, 4.0, 32.0, 32.0, 0.0),
        Rgba8::rgb(245, 158, 11),
        2.0,
        Some([5.0, 3.0]),
    );
    let png = decode_png(&s.encode_png().unwrap());
    assert_eq!(png.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(png.get_pixel(20, 20).0, [0, 128, 0, 255]);
}

#[test]
fn text_is_skipped_only_when_no_face_exists() {
    let mut s = CpuSurface::new(Canvas::new(10, 10), FontBook::without_system_fonts()).unwrap();
    let font = FontSpec::new("Arial", 12.0).bold();
    s.fill_text("Hi", &font, Point::new(5.0, 5.0), TextBaseline::Top, Rgba8::BLACK)
        .unwrap();
    s.stroke_text("Hi", &font, Point::new(5.0, 5.0), TextBaseline::Top, Rgba8::WHITE, 3.0)
        .unwrap();
    assert_eq!(s.measure_text("Hi", &font), TextMetrics::approximate("Hi", 12.0));
    let png = decode_png(&s.encode_png().unwrap());
    assert!(png.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn text_with_system_font_covers_pixels() {
    let mut s = surface(200, 60);
    s.fill_rect(s.canvas().rect(), Rgba8::WHITE);
    let font = FontSpec::new("Arial, sans-serif", 32.0).bold();
    let metrics = s.measure_text("Sale", &font);
    assert_ne!(metrics, TextMetrics::approximate("Sale", 32.0));
    s.fill_text("Sale", &font, Point::new(100.0, 10.0), TextBaseline::Top, Rgba8::BLACK)
        .unwrap();
    let png = decode_png(&s.encode_png().unwrap());
    let dark = png.pixels().filter(|p| p.0[0] < 128).count();
    assert!(dark > 50, "only {dark} dark pixels");
}
