use super::*;
use crate::foundation::core::Rgba8;
use crate::model::text::TextPosition;

fn model_with_group() -> (OptionModel, GroupId) {
    let mut m = OptionModel::new();
    let Applied::GroupAdded(id) = m.apply(ModelUpdate::AddTextGroup).unwrap() else {
        panic!("expected a new group");
    };
    (m, id)
}

#[test]
fn new_group_has_one_empty_option_and_custom_defaults() {
    let (m, id) = model_with_group();
    let g = m.group(id).unwrap();
    assert_eq!(g.options, vec![String::new()]);
    assert_eq!(g.style.position, TextPosition::Custom);
    assert_eq!(g.style.color, Rgba8::BLACK);
    assert_eq!((g.style.x, g.style.y), (Some(50.0), Some(30.0)));
    assert_eq!(g.expandable_options().count(), 0);
}

#[test]
fn group_ids_stay_unique_after_removal() {
    let (mut m, first) = model_with_group();
    m.apply(ModelUpdate::RemoveTextGroup(first)).unwrap();
    let Applied::GroupAdded(second) = m.apply(ModelUpdate::AddTextGroup).unwrap() else {
        panic!("expected a new group");
    };
    assert_ne!(first, second);
    assert!(m.apply(ModelUpdate::RemoveTextGroup(first)).is_err());
}

#[test]
fn last_option_is_never_removed() {
    let (mut m, id) = model_with_group();
    let out = m
        .apply(ModelUpdate::RemoveTextOption {
            group: id,
            index: 0,
        })
        .unwrap();
    assert_eq!(out, Applied::Unchanged);
    assert_eq!(m.group(id).unwrap().options.len(), 1);

    m.apply(ModelUpdate::AddTextOption(id)).unwrap();
    m.apply(ModelUpdate::UpdateTextOption {
        group: id,
        index: 1,
        value: "Sale".into(),
    })
    .unwrap();
    m.apply(ModelUpdate::RemoveTextOption {
        group: id,
        index: 0,
    })
    .unwrap();
    assert_eq!(m.group(id).unwrap().options, vec!["Sale".to_string()]);

    assert_eq!(
        m.apply(ModelUpdate::RemoveCtaOption(0)).unwrap(),
        Applied::Unchanged
    );
    assert!(m.apply(ModelUpdate::RemoveCtaOption(3)).is_err());
}

#[test]
fn positions_are_stored_clamped() {
    let (mut m, id) = model_with_group();
    m.apply(ModelUpdate::SetTextPosition(id, PercentPoint::new(150.0, -20.0)))
        .unwrap();
    let s = &m.group(id).unwrap().style;
    assert_eq!((s.x, s.y), (Some(100.0), Some(0.0)));

    m.apply(ModelUpdate::SetButtonPosition(PercentPoint::new(-1.0, 101.0)))
        .unwrap();
    assert_eq!((m.button.x, m.button.y), (Some(0.0), Some(100.0)));
}

#[test]
fn platform_custom_sizes_are_bounded() {
    let mut m = OptionModel::new();
    m.apply(ModelUpdate::SetPlatformSize {
        key: "Twitter_Post".into(),
        width: Some(50),
        height: Some(9000),
    })
    .unwrap();
    let p = m.platforms.get("Twitter_Post").unwrap();
    assert_eq!(p.canvas(), crate::foundation::core::Canvas::new(100, 3000));

    assert!(
        m.apply(ModelUpdate::SetPlatformSelected {
            key: "Nope".into(),
            selected: true
        })
        .is_err()
    );
}

#[test]
fn preview_platform_falls_back_to_first_selected() {
    let mut m = OptionModel::new();
    assert_eq!(m.preview_platform().unwrap().key, "Facebook_Square");
    m.apply(ModelUpdate::SetPreviewPlatform(Some("Instagram_Story".into())))
        .unwrap();
    assert_eq!(m.preview_platform().unwrap().key, "Instagram_Story");
    assert!(
        m.apply(ModelUpdate::SetPreviewPlatform(Some("Nope".into())))
            .is_err()
    );
}

#[test]
fn uploads_are_capped_and_current_index_clamped() {
    let mut m = OptionModel::new();
    let img = |n: &str| SourceImage::new(n, vec![0u8; 4]);
    let first = m
        .apply(ModelUpdate::UploadImages {
            images: (0..4).map(|i| img(&format!("a{i}"))).collect(),
            mode: UploadMode::Append,
        })
        .unwrap();
    assert_eq!(first, Applied::ImagesAccepted(4));
    m.apply(ModelUpdate::SelectImage(3)).unwrap();

    let second = m
        .apply(ModelUpdate::UploadImages {
            images: vec![img("b0"), img("b1")],
            mode: UploadMode::Append,
        })
        .unwrap();
    assert_eq!(second, Applied::ImagesAccepted(1));
    assert_eq!(m.images.len(), 5);

    m.apply(ModelUpdate::UploadImages {
        images: vec![img("c0")],
        mode: UploadMode::Replace,
    })
    .unwrap();
    assert_eq!(m.images.len(), 1);
    assert_eq!(m.images.current_index(), 0);

    m.apply(ModelUpdate::SelectImage(9)).unwrap();
    assert_eq!(m.images.current_index(), 0);
}

#[test]
fn image_navigation_wraps() {
    let mut m = OptionModel::new();
    m.apply(ModelUpdate::UploadImages {
        images: (0..3).map(|i| SourceImage::new(format!("{i}"), vec![1u8])).collect(),
        mode: UploadMode::Append,
    })
    .unwrap();
    m.apply(ModelUpdate::PreviousImage).unwrap();
    assert_eq!(m.images.current_index(), 2);
    m.apply(ModelUpdate::NextImage).unwrap();
    assert_eq!(m.images.current_index(), 0);
}

#[test]
fn combined_template_replaces_groups_and_button_style() {
    let (mut m, _) = model_with_group();
    m.apply(ModelUpdate::SetButtonPosition(PercentPoint::new(20.0, 20.0)))
        .unwrap();
    m.apply(ModelUpdate::ApplyCombinedTemplate("promo".into()))
        .unwrap();

    assert_eq!(m.text_groups.len(), 2);
    assert_eq!(m.text_groups[0].style.position, TextPosition::Top);
    assert_eq!(m.text_groups[1].style.position, TextPosition::Bottom);
    assert_eq!(m.button.border_radius, "50px");
    assert_eq!((m.button.x, m.button.y), (Some(20.0), Some(20.0)));
    assert!(
        m.apply(ModelUpdate::ApplyButtonTemplate("missing".into()))
            .is_err()
    );
}

#[test]
fn style_patch_touches_only_given_fields() {
    let (mut m, id) = model_with_group();
    m.apply(ModelUpdate::PatchTextStyle(
        id,
        TextStylePatch {
            size: Some(1.5),
            position: Some(TextPosition::Top),
            ..Default::default()
        },
    ))
    .unwrap();
    let s = &m.group(id).unwrap().style;
    assert_eq!(s.size, Some(1.5));
    assert_eq!(s.position, TextPosition::Top);
    assert_eq!(s.font, "Arial, sans-serif");
}

#[test]
fn border_radius_parsing_keeps_zero_and_falls_back_on_garbage() {
    use crate::model::button::parse_px;
    assert_eq!(parse_px("8px"), Some(8.0));
    assert_eq!(parse_px(" 4.5px"), Some(4.5));
    assert_eq!(parse_px("0px"), Some(0.0));
    assert_eq!(parse_px("px"), None);

    m_radius("abc", 8.0);
    m_radius("0px", 0.0);
    m_radius("50px", 50.0);
}

fn m_radius(raw: &str, want: f64) {
    let mut m = OptionModel::new();
    m.apply(ModelUpdate::PatchButtonStyle(ButtonStylePatch {
        border_radius: Some(raw.into()),
        ..Default::default()
    }))
    .unwrap();
    assert_eq!(m.button.radius_px(), want);
}

#[test]
fn option_model_serializes_without_images() {
    let (m, _) = model_with_group();
    let json = serde_json::to_value(&m).unwrap();
    assert!(json.get("images").is_none());
    assert_eq!(json["text_groups"][0]["position"], "custom");
    let back: OptionModel = serde_json::from_value(json).unwrap();
    assert_eq!(back.text_groups, m.text_groups);
}
