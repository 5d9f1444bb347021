use super::*;

const ALL: [Ease; 5] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::OutCubic,
];

#[test]
fn endpoints_are_exact() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
}

#[test]
fn curves_are_monotonic() {
    for ease in ALL {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease.apply(f64::from(i) / 100.0);
            assert!(v >= prev, "{ease:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn in_out_quad_is_symmetric_around_midpoint() {
    assert!((Ease::InOutQuad.apply(0.5) - 0.5).abs() < 1e-12);
    let a = Ease::InOutQuad.apply(0.25);
    let b = Ease::InOutQuad.apply(0.75);
    assert!((a + b - 1.0).abs() < 1e-12);
}

#[test]
fn parses_snake_case_names() {
    let e: Ease = serde_json::from_str("\"in_out_quad\"").unwrap();
    assert_eq!(e, Ease::InOutQuad);
    assert_eq!(Ease::default(), Ease::InOutQuad);
}
