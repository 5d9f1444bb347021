use super::*;
use serde_json::json;

#[test]
fn deserializes_camel_case_wire_format() {
    let style: RouteStyle = serde_json::from_value(json!({
        "color": "#FF0000",
        "strokeWidth": 3,
        "handDrawnEffect": true
    }))
    .unwrap();
    assert_eq!(style.color, RouteColor::rgb(255, 0, 0));
    assert_eq!(style.stroke_width, 3.0);
    assert!(style.hand_drawn_effect);

    let back = serde_json::to_value(&style).unwrap();
    assert_eq!(back["strokeWidth"], json!(3.0));
    assert_eq!(back["color"], json!("#FF0000"));
}

#[test]
fn default_uses_first_swatch() {
    let style = RouteStyle::default();
    assert_eq!(style.color.to_hex(), "#FF5733");
    assert!(style.validate().is_ok());
}

#[test]
fn palette_matches_picker_swatches() {
    let hex: Vec<String> = PALETTE.iter().map(|c| c.to_hex()).collect();
    assert_eq!(
        hex,
        [
            "#FF5733", "#33FF57", "#3357FF", "#FF33F5", "#33FFF5", "#F5FF33", "#8B33FF", "#FF8B33"
        ]
    );
}

#[test]
fn stroke_width_is_clamped_by_builder() {
    let style = RouteStyle::default();
    assert_eq!(style.clone().with_stroke_width(0.2).stroke_width, 1.0);
    assert_eq!(style.clone().with_stroke_width(42.0).stroke_width, 10.0);
    assert_eq!(style.clone().with_stroke_width(f64::NAN).stroke_width, 1.0);
    assert_eq!(style.with_stroke_width(4.0).stroke_width, 4.0);
}

#[test]
fn validate_rejects_non_positive_width() {
    let style = RouteStyle {
        stroke_width: 0.0,
        ..RouteStyle::default()
    };
    assert!(style.validate().is_err());
}
