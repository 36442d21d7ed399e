use super::*;

#[test]
fn premultiply_then_unpremultiply_is_close() {
    let mut px = vec![100u8, 50, 200, 128];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![50, 25, 100, 128]);
    unpremultiply_rgba8_in_place(&mut px);
    assert!((i32::from(px[0]) - 100).abs() <= 1);
    assert!((i32::from(px[2]) - 200).abs() <= 1);
}

#[test]
fn zero_alpha_premultiplies_to_transparent_black() {
    let mut px = vec![255u8, 255, 255, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![0, 0, 0, 0]);
}

#[test]
fn lenient_clamp_prefers_lower_bound_when_crossed() {
    assert_eq!(clamp_lenient(50.0, 5.0, 100.0), 50.0);
    assert_eq!(clamp_lenient(-3.0, 5.0, 100.0), 5.0);
    assert_eq!(clamp_lenient(500.0, 5.0, 100.0), 100.0);
    assert_eq!(clamp_lenient(50.0, 5.0, -10.0), 5.0);
}

#[test]
fn non_finite_multipliers_become_one() {
    assert_eq!(finite_or_one(f64::NAN), 1.0);
    assert_eq!(finite_or_one(f64::INFINITY), 1.0);
    assert_eq!(finite_or_one(1.5), 1.5);
}
