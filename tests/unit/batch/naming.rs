use super::*;
use crate::expand::ConcreteText;
use crate::model::{GroupId, TextStyle};

fn variant(texts: &[&str], cta: &str) -> Variant {
    Variant {
        texts: texts
            .iter()
            .enumerate()
            .map(|(i, t)| ConcreteText {
                group: GroupId(i as u64),
                text: t.to_string(),
                style: TextStyle::default(),
            })
            .collect(),
        cta_text: cta.to_string(),
    }
}

#[test]
fn sanitizing_strips_path_unsafe_characters() {
    assert_eq!(sanitize_component("50% off / today!"), "50_off_today");
    assert_eq!(sanitize_component("  a  b  "), "a_b");
    assert_eq!(sanitize_component("../../etc"), "etc");
    assert_eq!(sanitize_component("Café-Olé"), "Café-Olé");
    assert_eq!(sanitize_component("__x__"), "x");
}

#[test]
fn excerpts_truncate_and_fall_back() {
    assert_eq!(excerpt("abcdefghijklmnopqrstuvwxyz"), "abcdefghijklmnopqrst");
    assert_eq!(excerpt("!!!"), "none");
    assert_eq!(excerpt(""), "none");
    assert_eq!(excerpt("abcdefghijklmnopqrs tuv"), "abcdefghijklmnopqrs");
}

#[test]
fn file_names_follow_the_pattern() {
    assert_eq!(
        file_name("Image", 0, "Facebook_Square", &variant(&["Sale", "50% off"], "Buy now"), 1),
        "Image1_Facebook_Square_Sale-50_off_Buy_now_001.png"
    );
    assert_eq!(
        file_name("Image", 2, "Twitter_Post", &variant(&[], ""), 12),
        "Image3_Twitter_Post_none_none_012.png"
    );
}

#[test]
fn archive_name_carries_total() {
    assert_eq!(
        archive_name("advertisement_images", 6),
        "advertisement_images_6_variants.zip"
    );
    assert_eq!(archive_name("///", 1), "archive_1_variants.zip");
}

#[test]
fn registry_suffixes_duplicates() {
    let mut r = NameRegistry::default();
    assert_eq!(r.claim("a.png".into()), "a.png");
    assert_eq!(r.claim("a.png".into()), "a-2.png");
    assert_eq!(r.claim("a.png".into()), "a-3.png");
    assert_eq!(r.claim("noext".into()), "noext");
    assert_eq!(r.claim("noext".into()), "noext-2");
}
