use super::*;

const DEJAVU_SANS: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

#[test]
fn family_lists_are_split_unquoted_and_lowercased() {
    assert_eq!(
        family_candidates("'Times New Roman', \"Georgia\" ,serif,"),
        vec!["times new roman", "georgia", "serif"]
    );
    assert!(family_candidates("  ,  ").is_empty());
}

#[test]
fn pick_face_prefers_listed_family_then_weight() {
    let faces = [
        ("Arial", "Liberation Sans", false),
        ("Arial", "Liberation Sans", true),
        ("Georgia", "Gelasio", false),
    ];
    assert_eq!(pick_face(&faces, "Arial, sans-serif", false), Some(0));
    assert_eq!(pick_face(&faces, "Arial, sans-serif", true), Some(1));
    assert_eq!(pick_face(&faces, "'Unknown', Georgia", true), Some(2));
    assert_eq!(pick_face(&faces, "gelasio", false), Some(2));
}

#[test]
fn unlisted_families_only_match_through_the_last_resort() {
    let faces = [("Georgia", "Gelasio", false), ("Impact", "Anton", true)];
    assert_eq!(pick_face(&faces, "Comic Sans MS", false), None);
    assert_eq!(first_face(&faces, false), Some(0));
    assert_eq!(first_face(&faces, true), Some(1));
    assert_eq!(first_face(&[], false), None);
}

#[test]
fn generic_families_expand_to_installed_names() {
    let order = system_family_order("'Times New Roman', serif");
    assert_eq!(order[0], "times new roman");
    assert_eq!(order[1], "times");
    assert!(order.contains(&"dejavu serif".to_string()));
    assert_eq!(order.last().map(String::as_str), Some("freesans"));
    assert_eq!(order.iter().filter(|n| *n == "times new roman").count(), 1);

    let mono = system_family_order("monospace");
    assert_eq!(mono[0], "courier new");
    assert!(mono.contains(&"arial".to_string()));
}

#[test]
fn book_without_any_face_measures_approximately() {
    let mut book = FontBook::without_system_fonts();
    let font = FontSpec::new("Arial", 20.0);
    assert!(book.shape("Sale", &font).unwrap().is_none());
    assert_eq!(book.measure("Sale", &font), TextMetrics::approximate("Sale", 20.0));
    assert!(book.shape("Sale", &FontSpec::new("Arial", 0.0)).is_err());
}

#[test]
fn default_book_shapes_with_a_system_font() {
    let mut book = FontBook::new();
    assert!(book.is_empty());
    let shaped = book
        .shape("Hello", &FontSpec::new("Arial, sans-serif", 32.0).bold())
        .unwrap()
        .expect("a system font should be installed");
    assert_eq!(shaped.glyphs.len(), 5);
    assert!(shaped.metrics.width > 0.0);
    assert!(shaped.glyphs.windows(2).all(|w| w[1].x > w[0].x));
    assert!(shaped.glyphs.iter().all(|g| g.id != 0));
}

#[test]
fn registered_face_wins_over_system_fonts() {
    let bytes = std::fs::read(DEJAVU_SANS).expect("DejaVu Sans should be installed");
    let mut book = FontBook::without_system_fonts();
    book.register("Brand", bytes, false).unwrap();
    let shaped = book
        .shape("Hello", &FontSpec::new("Brand, sans-serif", 32.0))
        .unwrap()
        .unwrap();
    assert_eq!(shaped.glyphs.len(), 5);
    assert!(shaped.metrics.width > 0.0);

    // Unknown families still land on the registered face when system fonts are off.
    assert!(book.shape("Hi", &FontSpec::new("Nope", 20.0)).unwrap().is_some());
}
