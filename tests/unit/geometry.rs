use super::*;
use kurbo::PathEl;

fn corner_kinds(path: &BezPath) -> Vec<&'static str> {
    path.elements()
        .iter()
        .map(|el| match el {
            PathEl::MoveTo(_) => "M",
            PathEl::LineTo(_) => "L",
            PathEl::QuadTo(..) => "Q",
            PathEl::CurveTo(..) => "C",
            PathEl::ClosePath => "Z",
        })
        .collect()
}

#[test]
fn oversized_radius_matches_half_min_side_exactly() {
    let clamped = rounded_rect_path(10.0, 20.0, 100.0, 40.0, 20.0);
    let oversized = rounded_rect_path(10.0, 20.0, 100.0, 40.0, 500.0);
    assert_eq!(clamped.elements(), oversized.elements());
}

#[test]
fn non_positive_radius_is_a_plain_rectangle() {
    for r in [0.0, -4.0, f64::NAN] {
        let p = rounded_rect_path(0.0, 0.0, 30.0, 10.0, r);
        assert_eq!(corner_kinds(&p), vec!["M", "L", "L", "L", "Z"]);
        assert_eq!(
            p.elements()[..4],
            [
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(30.0, 0.0)),
                PathEl::LineTo(Point::new(30.0, 10.0)),
                PathEl::LineTo(Point::new(0.0, 10.0)),
            ]
        );
    }
}

#[test]
fn rounded_path_is_closed_with_four_curved_corners() {
    let p = rounded_rect_path(0.0, 0.0, 100.0, 50.0, 8.0);
    let kinds = corner_kinds(&p);
    assert_eq!(kinds.iter().filter(|k| **k == "Q").count(), 4);
    assert_eq!(kinds.last(), Some(&"Z"));
    assert_eq!(p.elements()[0], PathEl::MoveTo(Point::new(8.0, 0.0)));
}

#[test]
fn percent_mapping_round_trips_through_pixels() {
    assert_eq!(percent_to_px(50.0, 800.0), 400.0);
    assert_eq!(px_to_percent(400.0, 800.0), 50.0);
    assert_eq!(px_to_percent(10.0, 0.0), 0.0);
}

#[test]
fn client_coordinates_map_through_the_displayed_rect() {
    let view = ViewRect::new(100.0, 50.0, 400.0, 300.0);
    let p = view.client_to_percent(300.0, 200.0);
    assert_eq!(p, PercentPoint::new(50.0, 50.0));

    let outside = view.client_to_percent(700.0, -10.0);
    assert_eq!(outside.clamped(), PercentPoint::new(100.0, 0.0));
}

#[test]
fn font_sizes_have_floors_and_scale_by_multiplier() {
    assert_eq!(text_font_px(100.0, 1.0), 20.0);
    assert_eq!(text_font_px(1000.0, 1.0), 40.0);
    assert_eq!(text_font_px(1000.0, 1.5), 60.0);
    assert_eq!(button_font_px(100.0, 2.0), 36.0);
    assert_eq!(text_line_pitch(100.0), 25.0);
    assert_eq!(text_line_pitch(1080.0), 54.0);
}

#[test]
fn approximate_metrics_count_characters_not_bytes() {
    let m = TextMetrics::approximate("立即购买", 10.0);
    assert_eq!(m.width, 24.0);
    assert_eq!(m.height, 10.0);
}
