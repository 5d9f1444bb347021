use super::*;

fn pts(raw: &[(f64, f64)]) -> Vec<RoutePoint> {
    raw.iter().map(|&(lat, lng)| RoutePoint::new(lat, lng)).collect()
}

#[test]
fn bounds_scan_all_points() {
    let route = Route::new(pts(&[(37.0, -122.0), (37.1, -122.1), (37.2, -122.0)]));
    let b = route.bounds().unwrap();
    assert_eq!(b.min_lat, 37.0);
    assert_eq!(b.max_lat, 37.2);
    assert_eq!(b.min_lng, -122.1);
    assert_eq!(b.max_lng, -122.0);
    assert!((b.lat_range() - 0.2).abs() < 1e-12);
    assert!((b.center().latitude - 37.1).abs() < 1e-12);
    assert!(!b.is_degenerate());
}

#[test]
fn empty_route_has_no_bounds() {
    assert!(Route::default().bounds().is_none());
    assert!(!Route::default().is_drawable());
}

#[test]
fn identical_points_are_degenerate() {
    let route = Route::new(pts(&[(10.0, 20.0), (10.0, 20.0)]));
    assert!(route.is_drawable());
    assert!(route.bounds().unwrap().is_degenerate());
}

#[test]
fn validate_reports_first_bad_index() {
    let route = Route::new(pts(&[(0.0, 0.0), (91.0, 0.0), (0.0, 200.0)]));
    let err = route.validate().unwrap_err().to_string();
    assert!(err.contains("index 1"), "{err}");

    let route = Route::new(pts(&[(0.0, f64::NAN)]));
    assert!(route.validate().is_err());

    let route = Route::new(pts(&[(-90.0, -180.0), (90.0, 180.0)]));
    assert!(route.validate().is_ok());
}

#[test]
fn serializes_as_plain_array() {
    let route = Route::new(pts(&[(1.0, 2.0)]));
    let json = serde_json::to_string(&route).unwrap();
    assert_eq!(json, r#"[{"latitude":1.0,"longitude":2.0}]"#);
    let back: Route = serde_json::from_str(&json).unwrap();
    assert_eq!(back, route);
}
