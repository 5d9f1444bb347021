use super::*;
use rand::SeedableRng;
use rand::rngs::mock::StepRng;
use rand_pcg::Pcg64;

fn synth(hand_drawn: bool) -> PathSynthesizer {
    PathSynthesizer::new(&RendererConfig::default(), hand_drawn)
}

fn zigzag(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| Point::new(i as f64 * 20.0, if i % 2 == 0 { 0.0 } else { 7.0 }))
        .collect()
}

#[test]
fn command_count_matches_point_count() {
    let mut rng = Pcg64::seed_from_u64(1);
    for n in 2..12 {
        let path = synth(true).synthesize(&zigzag(n), &mut rng);
        assert_eq!(path.len(), n);
        assert!(matches!(path.commands()[0], PathCommand::MoveTo { .. }));
        assert!(
            path.commands()[1..]
                .iter()
                .all(|c| matches!(c, PathCommand::QuadTo { .. }))
        );
    }
}

#[test]
fn fewer_than_two_points_yield_empty_path() {
    let mut rng = Pcg64::seed_from_u64(1);
    assert!(synth(true).synthesize(&[], &mut rng).is_empty());
    assert!(
        synth(true)
            .synthesize(&[Point::new(1.0, 1.0)], &mut rng)
            .is_empty()
    );
}

#[test]
fn curves_end_on_input_points() {
    let points = zigzag(5);
    let path = synth(true).synthesize(&points, &mut Pcg64::seed_from_u64(9));
    for (cmd, p) in path.commands().iter().zip(&points) {
        assert_eq!(cmd.end_point(), *p);
    }
}

#[test]
fn magnitude_scales_then_caps() {
    let s = synth(true);
    assert!((s.wobble_magnitude(10.0) - 1.5).abs() < 1e-12);
    assert_eq!(s.wobble_magnitude(20.0), 3.0);
    assert_eq!(s.wobble_magnitude(500.0), 3.0);
    assert_eq!(s.wobble_magnitude(0.0), 0.0);
    assert_eq!(synth(false).wobble_magnitude(500.0), 0.0);
}

fn control_offsets(path: &VectorPath, points: &[Point]) -> Vec<(f64, f64, f64)> {
    path.commands()[1..]
        .iter()
        .zip(points.windows(2))
        .map(|(cmd, pair)| {
            let PathCommand::QuadTo { ctrl, .. } = *cmd else {
                panic!("expected QuadTo");
            };
            let mid = pair[0].midpoint(pair[1]);
            let m = synth(true).wobble_magnitude(pair[0].distance(pair[1]));
            (ctrl.x - mid.x, ctrl.y - mid.y, m)
        })
        .collect()
}

#[test]
fn offsets_stay_within_half_magnitude() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 3.0),
        Point::new(100.0, 3.0),
        Point::new(100.5, 3.0),
    ];
    // Lowest and highest possible unit samples bracket the offset range.
    for mut rng in [StepRng::new(0, 0), StepRng::new(u64::MAX, 0)] {
        let path = synth(true).synthesize(&points, &mut rng);
        for (dx, dy, m) in control_offsets(&path, &points) {
            assert!(dx.abs() <= m / 2.0 + 1e-12, "dx={dx} m={m}");
            assert!(dy.abs() <= m / 2.0 + 1e-12, "dy={dy} m={m}");
        }
    }

    let path = synth(true).synthesize(&points, &mut StepRng::new(0, 0));
    let (dx, dy, m) = control_offsets(&path, &points)[0];
    assert!((dx + m / 2.0).abs() < 1e-12);
    assert!((dy + m / 2.0).abs() < 1e-12);

    let mut rng = Pcg64::seed_from_u64(42);
    for _ in 0..50 {
        let path = synth(true).synthesize(&points, &mut rng);
        for (dx, dy, m) in control_offsets(&path, &points) {
            assert!(dx.abs() <= m / 2.0 && dy.abs() <= m / 2.0);
        }
    }
}

#[test]
fn seeded_generators_reproduce_paths() {
    let points = zigzag(6);
    let a = synth(true).synthesize(&points, &mut Pcg64::seed_from_u64(7));
    let b = synth(true).synthesize(&points, &mut Pcg64::seed_from_u64(7));
    let c = synth(true).synthesize(&points, &mut Pcg64::seed_from_u64(8));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn effect_off_uses_exact_midpoints() {
    let points = zigzag(4);
    let path = synth(false).synthesize(&points, &mut Pcg64::seed_from_u64(3));
    for (cmd, pair) in path.commands()[1..].iter().zip(points.windows(2)) {
        let PathCommand::QuadTo { ctrl, .. } = *cmd else {
            panic!("expected QuadTo");
        };
        assert_eq!(ctrl, pair[0].midpoint(pair[1]));
    }
}
