use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SketchError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SketchError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(SketchError::render("x").to_string().contains("render error:"));
    assert!(
        SketchError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn invalid_viewport_reports_dimensions() {
    let msg = SketchError::invalid_viewport(0.0, -3.0).to_string();
    assert!(msg.starts_with("invalid viewport:"));
    assert!(msg.contains("0x-3"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SketchError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let err: SketchError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, SketchError::Serde(_)));
}
