use super::*;
use crate::animation::ease::Ease;
use crate::style::color::RouteColor;

fn renderer() -> StylizedRouteRenderer {
    let config = RendererConfig {
        seed: Some(11),
        ease: Ease::Linear,
        ..RendererConfig::default()
    };
    StylizedRouteRenderer::new(config).unwrap()
}

fn input(points: &[(f64, f64)], width: f64, height: f64) -> RenderInput {
    RenderInput {
        points: points
            .iter()
            .map(|&(lat, lng)| RoutePoint::new(lat, lng))
            .collect(),
        style: RouteStyle {
            color: RouteColor::rgb(255, 0, 0),
            stroke_width: 3.0,
            hand_drawn_effect: true,
        },
        width,
        height,
    }
}

const TRIANGLE: [(f64, f64); 3] = [(37.0, -122.0), (37.1, -122.1), (37.2, -122.0)];

#[test]
fn first_input_starts_a_run() {
    let mut r = renderer();
    assert_eq!(r.state(), RevealState::Idle);
    let change = r.set_input(input(&TRIANGLE, 400.0, 300.0), 0.0).unwrap();
    assert!(matches!(change, InputChange::Route(_)));
    assert_eq!(r.state(), RevealState::Animating);
    assert_eq!(r.full_path().len(), 3);
    assert_eq!(r.screen_points().len(), 3);
}

#[test]
fn invalid_viewport_is_rejected_and_previous_input_kept() {
    let mut r = renderer();
    r.set_input(input(&TRIANGLE, 400.0, 300.0), 0.0).unwrap();
    let err = r.set_input(input(&TRIANGLE, 0.0, 300.0), 0.0).unwrap_err();
    assert!(matches!(
        err,
        crate::foundation::error::SketchError::InvalidViewport { .. }
    ));
    assert_eq!(r.input().unwrap().width, 400.0);
}

#[test]
fn insufficient_points_render_empty_frames() {
    let mut r = renderer();
    r.set_input(input(&[(1.0, 1.0)], 100.0, 100.0), 0.0).unwrap();
    let f = r.tick(500.0).unwrap();
    assert_eq!(f.total_commands, 0);
    assert!(f.path.elements().is_empty());
    let f = r.tick(1000.0).unwrap();
    assert!(f.is_complete());
    assert!(f.path.elements().is_empty());
}

#[test]
fn frames_carry_round_stroke_spec() {
    let mut r = renderer();
    r.set_input(input(&TRIANGLE, 400.0, 300.0), 0.0).unwrap();
    let f = r.tick(0.0).unwrap();
    assert_eq!(f.stroke.width, 3.0);
    assert_eq!(f.stroke.color, RouteColor::rgb(255, 0, 0));
    assert_eq!(f.stroke.join, kurbo::Join::Round);
    assert_eq!(f.stroke.cap, kurbo::Cap::Round);
    assert_eq!(f.stroke.soft_edge, 0.5);
}

#[test]
fn completion_emits_once_then_stops() {
    let mut r = renderer();
    r.set_input(input(&TRIANGLE, 400.0, 300.0), 0.0).unwrap();
    assert!(r.tick(999.0).is_some());
    let done = r.tick(1000.0).unwrap();
    assert!(done.is_complete());
    assert_eq!(done.visible_commands, 3);
    assert!(r.tick(1016.0).is_none());
    assert!(!r.is_animating());
    assert_eq!(r.current_frame().unwrap().visible_commands, 3);
}

#[test]
fn new_route_mid_animation_restarts_from_zero() {
    let mut r = renderer();
    r.set_input(input(&TRIANGLE, 400.0, 300.0), 0.0).unwrap();
    let f = r.tick(700.0).unwrap();
    assert_eq!(f.visible_commands, 2);
    let old_run = f.run;

    let four = [(0.0, 0.0), (0.1, 0.1), (0.2, 0.0), (0.3, 0.1)];
    let InputChange::Route(new_run) = r.set_input(input(&four, 400.0, 300.0), 700.0).unwrap()
    else {
        panic!("expected a new run");
    };
    assert_ne!(old_run, new_run);
    assert_eq!(r.progress(), 0.0);
    assert_eq!(r.current_frame().unwrap().visible_commands, 0);

    // A late tick from the old run is ignored.
    assert!(
        r.deliver(ClockTick {
            run: old_run,
            progress: 0.9
        })
        .is_none()
    );
    let f = r.tick(700.0).unwrap();
    assert_eq!((f.run, f.visible_commands, f.total_commands), (new_run, 0, 4));
}

#[test]
fn resize_rebuilds_path_but_keeps_progress() {
    let mut r = renderer();
    r.set_input(input(&TRIANGLE, 400.0, 300.0), 0.0).unwrap();
    r.tick(500.0);
    let before: Vec<Point> = r.screen_points().to_vec();

    let change = r.set_input(input(&TRIANGLE, 800.0, 600.0), 500.0).unwrap();
    assert_eq!(change, InputChange::Viewport);
    assert_eq!(r.progress(), 0.5);
    assert_ne!(r.screen_points(), before.as_slice());
    for p in r.screen_points() {
        assert!(p.x > 0.0 && p.x < 800.0 && p.y > 0.0 && p.y < 600.0);
    }
}

#[test]
fn style_changes_are_classified() {
    let mut r = renderer();
    let base = input(&TRIANGLE, 400.0, 300.0);
    r.set_input(base.clone(), 0.0).unwrap();
    assert_eq!(
        r.set_input(base.clone(), 10.0).unwrap(),
        InputChange::Unchanged
    );

    let mut wider = base.clone();
    wider.style.stroke_width = 6.0;
    assert_eq!(r.set_input(wider, 10.0).unwrap(), InputChange::Stroke);
    assert_eq!(r.stroke().unwrap().width, 6.0);

    let mut plain = base;
    plain.style.hand_drawn_effect = false;
    assert_eq!(r.set_input(plain, 10.0).unwrap(), InputChange::Effect);
    assert_eq!(r.full_path().len(), 3);
}

#[test]
fn replay_restarts_current_route() {
    let mut r = renderer();
    assert!(r.replay(0.0).is_none());
    r.set_input(input(&TRIANGLE, 400.0, 300.0), 0.0).unwrap();
    r.tick(2000.0);
    let run = r.replay(3000.0).unwrap();
    assert_eq!(r.state(), RevealState::Animating);
    assert_eq!(r.tick(3500.0).unwrap().run, run);
}

#[test]
fn out_of_range_coordinates_are_rejected() {
    let mut r = renderer();
    assert!(
        r.set_input(input(&[(0.0, 0.0), (120.0, 0.0)], 100.0, 100.0), 0.0)
            .is_err()
    );
    assert!(r.input().is_none());
}

#[test]
fn end_to_end_triangle_scenario() {
    let config = RendererConfig {
        seed: Some(3),
        ..RendererConfig::default()
    };
    let mut r = StylizedRouteRenderer::new(config).unwrap();
    let (w, h) = (400.0, 300.0);
    r.set_input(input(&TRIANGLE, w, h), 0.0).unwrap();

    for p in r.screen_points() {
        assert!(p.x >= w * 0.15 / 1.3 - 1e-6 && p.x <= w - w * 0.15 / 1.3 + 1e-6);
        assert!(p.y >= h * 0.15 / 1.3 - 1e-6 && p.y <= h - h * 0.15 / 1.3 + 1e-6);
    }
    let cmds = r.full_path().commands();
    assert_eq!(cmds.len(), 3);
    assert!(matches!(cmds[0], crate::sketch::path::PathCommand::MoveTo { .. }));

    let mut counts = Vec::new();
    let mut t = 0.0;
    while let Some(f) = r.tick(t) {
        counts.push(f.visible_commands);
        t += 1000.0 / 60.0;
    }
    assert!(counts.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(counts.first(), Some(&0));
    assert_eq!(counts.last(), Some(&3));
}
