use super::*;
use serde_json::json;

#[test]
fn parses_short_long_and_alpha_hex() {
    assert_eq!(Rgba8::parse("#fff").unwrap(), Rgba8::WHITE);
    assert_eq!(Rgba8::parse("#3b82f6").unwrap(), Rgba8::rgb(0x3b, 0x82, 0xf6));
    assert_eq!(
        Rgba8::parse("#0000ff80").unwrap(),
        Rgba8::rgba(0, 0, 255, 128)
    );
    assert_eq!(Rgba8::parse("FF7F50").unwrap(), Rgba8::rgb(255, 127, 80));
}

#[test]
fn parses_named_colors_case_insensitively() {
    assert_eq!(Rgba8::parse("White").unwrap(), Rgba8::WHITE);
    assert_eq!(Rgba8::parse(" black ").unwrap(), Rgba8::BLACK);
}

#[test]
fn rejects_malformed_colors() {
    assert!(Rgba8::parse("#12345").is_err());
    assert!(Rgba8::parse("#gggggg").is_err());
    assert!(Rgba8::parse("#ééé").is_err());
    assert!(Rgba8::parse("").is_err());
}

#[test]
fn serde_uses_hex_strings() {
    let c: Rgba8 = serde_json::from_value(json!("#ef4444")).unwrap();
    assert_eq!(serde_json::to_value(c).unwrap(), json!("#ef4444"));

    let c: Rgba8 = serde_json::from_value(json!({"r": 1, "g": 2, "b": 3})).unwrap();
    assert_eq!(c, Rgba8::rgb(1, 2, 3));

    let translucent = Rgba8::rgba(1, 2, 3, 4);
    assert_eq!(translucent.to_hex(), "#01020304");
}

#[test]
fn empty_canvas_is_not_ready() {
    assert!(Canvas::new(0, 10).is_empty());
    assert!(!Canvas::new(1, 1).is_empty());
    assert_eq!(Canvas::new(20, 10).rect(), Rect::new(0.0, 0.0, 20.0, 10.0));
}
