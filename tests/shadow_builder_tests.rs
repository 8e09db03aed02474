use approx::assert_relative_eq;
use chart_builder::DropShadowOptions;
use chart_builder::api::create_drop_shadow;
use chart_builder::core::{Color, DropShadow, Offset};

#[test]
fn missing_options_yield_baseline_shadow() {
    let shadow = create_drop_shadow(None);
    assert_eq!(shadow.color(), Color::BLACK);
    assert_eq!(shadow.offset(), Offset::new(0.0, 0.0));
    assert_eq!(shadow.blur(), 0.0);
    assert_eq!(shadow, DropShadow::default());
}

#[test]
fn empty_options_match_missing_options() {
    let shadow = create_drop_shadow(Some(&DropShadowOptions::default()));
    assert_eq!(shadow, create_drop_shadow(None));
}

#[test]
fn blur_only_keeps_other_defaults() {
    let options = DropShadowOptions::default().with_blur(4.5);
    let shadow = create_drop_shadow(Some(&options));
    assert_relative_eq!(shadow.blur(), 4.5);
    assert_eq!(shadow.color(), Color::BLACK);
    assert_eq!(shadow.offset(), Offset::ZERO);
}

#[test]
fn all_fields_are_applied() {
    let color = Color::rgba(0.2, 0.4, 0.6, 0.5);
    let options = DropShadowOptions::default()
        .with_color(color)
        .with_offset(3.0, -2.0)
        .with_blur(6.0);
    let shadow = create_drop_shadow(Some(&options));
    assert_eq!(shadow.color(), color);
    assert_relative_eq!(shadow.offset().x, 3.0);
    assert_relative_eq!(shadow.offset().y, -2.0);
    assert_relative_eq!(shadow.blur(), 6.0);
}

#[test]
fn offset_is_read_and_written_as_a_pair() {
    let options: DropShadowOptions =
        serde_json::from_value(serde_json::json!({ "offset": [3.0, -2.0], "blur": 1.5 }))
            .expect("shadow options");
    assert_eq!(options.offset, Some(Offset::new(3.0, -2.0)));

    let shadow = create_drop_shadow(Some(&options));
    assert_eq!(shadow.offset(), Offset::new(3.0, -2.0));

    let written = serde_json::to_value(&options).expect("serialize shadow options");
    assert_eq!(written["offset"], serde_json::json!([3.0, -2.0]));
}
