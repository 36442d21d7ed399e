use super::*;
use crate::render::record::RecordingSurface;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn auto_mode_fits_and_centers() {
    let r = place_image(
        Canvas::new(1000, 500),
        400,
        400,
        &ImageScaleSettings::default(),
    )
    .unwrap();
    assert_eq!(r, Rect::new(250.0, 0.0, 750.0, 500.0));

    let wide = place_image(Canvas::new(1000, 1000), 2000, 500, &ImageScaleSettings::default())
        .unwrap();
    assert_eq!(wide, Rect::new(0.0, 375.0, 1000.0, 625.0));
}

#[test]
fn ratio_caps_bound_both_axes() {
    let scale = ImageScaleSettings {
        width_ratio: 0.5,
        height_ratio: 0.8,
        ..ImageScaleSettings::default()
    };
    let r = place_image(Canvas::new(1000, 1000), 100, 100, &scale).unwrap();
    assert!(approx(r.width(), 500.0) && approx(r.height(), 500.0));

    let over = ImageScaleSettings {
        width_ratio: 3.0,
        height_ratio: 3.0,
        ..ImageScaleSettings::default()
    };
    let r = place_image(Canvas::new(300, 200), 10, 10, &over).unwrap();
    assert!(r.x0 >= 0.0 && r.y0 >= 0.0 && r.x1 <= 300.0 && r.y1 <= 200.0);
}

#[test]
fn stretch_ignores_aspect_and_wins_over_custom_ratio() {
    let mut scale = ImageScaleSettings::stretched(1.0, 1.0);
    scale.aspect_ratio = "16:9".into();
    let r = place_image(Canvas::new(1000, 500), 300, 300, &scale).unwrap();
    assert_eq!(r, Rect::new(0.0, 0.0, 1000.0, 500.0));
}

#[test]
fn custom_aspect_overrides_source_aspect() {
    let scale = ImageScaleSettings {
        mode: crate::model::ScaleMode::Custom,
        aspect_ratio: "2:1".into(),
        ..ImageScaleSettings::default()
    };
    let r = place_image(Canvas::new(800, 800), 100, 100, &scale).unwrap();
    assert!(approx(r.width(), 800.0) && approx(r.height(), 400.0));
    assert!(approx(r.y0, 200.0));

    assert!(place_image(Canvas::new(0, 10), 1, 1, &scale).is_none());
    assert!(place_image(Canvas::new(10, 10), 0, 1, &scale).is_none());
}

#[test]
fn default_button_sits_below_image_centered() {
    let mut surface = RecordingSurface::default();
    let button = ButtonSpec {
        x: None,
        y: None,
        ..ButtonSpec::default()
    };
    let canvas = Canvas::new(1000, 1000);
    let b = layout_button(&mut surface, canvas, &button, "Buy", 500.0).unwrap();

    // 35px bold label, 3 chars at 0.6em.
    assert!(approx(b.font.size_px, 35.0));
    assert!(approx(b.rect.width(), 3.0 * 35.0 * 0.6 + 24.0));
    assert!(approx(b.rect.height(), 35.0 + 18.0));
    assert!(approx(b.rect.y0, 550.0));
    assert!(approx(b.rect.center().x, 500.0));
    assert!(approx(b.radius, 8.0));

    let low = layout_button(&mut surface, canvas, &button, "Buy", 990.0).unwrap();
    assert!(approx(low.rect.y0, 1000.0 - 53.0 - 50.0));
}

#[test]
fn positioned_button_is_centered_then_clamped() {
    let mut surface = RecordingSurface::default();
    let canvas = Canvas::new(800, 600);
    let mut button = ButtonSpec::default();
    button.x = Some(50.0);
    button.y = Some(50.0);
    let b = layout_button(&mut surface, canvas, &button, "Go", 0.0).unwrap();
    assert!(approx(b.label_anchor().x, 400.0) && approx(b.label_anchor().y, 300.0));

    button.x = Some(100.0);
    button.y = Some(0.0);
    let b = layout_button(&mut surface, canvas, &button, "Go", 0.0).unwrap();
    assert!(approx(b.rect.x1, 795.0));
    assert!(approx(b.rect.y0, 5.0));

    assert!(layout_button(&mut surface, canvas, &button, "  ", 0.0).is_none());
}

#[test]
fn size_multiplier_scales_font_padding_and_radius() {
    let mut surface = RecordingSurface::default();
    let button = ButtonSpec {
        size: Some(2.0),
        border_radius: "10px".into(),
        ..ButtonSpec::default()
    };
    let b = layout_button(&mut surface, Canvas::new(400, 400), &button, "A", 0.0).unwrap();
    assert!(approx(b.font.size_px, 36.0));
    assert!(approx(b.rect.height(), 36.0 + 36.0));
    assert!(approx(b.radius, 20.0));
}
