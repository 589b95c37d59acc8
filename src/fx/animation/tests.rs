use super::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn running(sample: Sample) -> f32 {
    match sample {
        Sample::Running(t) => t,
        other => panic!("expected running, got {other:?}"),
    }
}

#[test]
fn pending_until_delay_elapses() {
    let timing = Timing::looping(1.0).delayed(0.5);
    assert_eq!(timing.sample(0.49), Sample::Pending);
    assert!(approx(running(timing.sample(0.5)), 0.0));
    assert!(approx(running(timing.sample(1.0)), 0.5));
}

#[test]
fn looping_wraps_every_cycle() {
    let timing = Timing::looping(2.0);
    assert!(approx(running(timing.sample(0.5)), 0.25));
    assert!(approx(running(timing.sample(2.5)), 0.25));
    assert!(approx(running(timing.sample(401.0)), 0.5));
    assert_eq!(timing.active_span(), None);
}

#[test]
fn autoreverse_runs_back_to_start() {
    let timing = Timing::looping(1.0).autoreversing();
    assert!(approx(running(timing.sample(0.5)), 0.5));
    assert!(approx(running(timing.sample(1.0)), 1.0));
    assert!(approx(running(timing.sample(1.5)), 0.5));
    assert!(approx(running(timing.sample(1.99)), 0.01));
}

#[test]
fn finite_repeat_finishes_after_its_cycles() {
    let timing = Timing::looping(1.5).times(2).delayed(1.0);
    assert_eq!(timing.active_span(), Some(4.0));
    assert!(matches!(timing.sample(3.9), Sample::Running(_)));
    assert_eq!(timing.sample(4.0), Sample::Finished);
}

#[test]
fn phase_pre_advances_first_cycle() {
    let timing = Timing::looping(10.0).phased(0.3);
    assert!(approx(running(timing.sample(0.0)), 0.3));
    assert!(approx(running(timing.sample(7.0)), 0.0));
}

#[test]
fn eased_curve_keeps_endpoints() {
    let timing = Timing::looping(1.0).eased();
    assert!(approx(running(timing.sample(0.0)), 0.0));
    assert!(approx(running(timing.sample(0.5)), 0.5));
    assert!(running(timing.sample(0.25)) < 0.25);
}

#[test]
fn zero_duration_does_not_divide_by_zero() {
    let timing = Timing::looping(0.0);
    assert!(approx(running(timing.sample(3.0)), 1.0));
}

#[test]
fn sway_oscillates_inside_amplitude() {
    let sway = Animation::new(Track::Sway(12.0), Timing::looping(2.0).autoreversing());
    for step in 0..40 {
        let pose = Pose::sampled(1.0, std::slice::from_ref(&sway), step as f32 * 0.1);
        assert!(pose.offset.x.abs() <= 12.0 + 1e-3);
    }
    let start = Pose::sampled(1.0, std::slice::from_ref(&sway), 0.0);
    assert!(approx(start.offset.x, -12.0));
}

#[test]
fn opacity_track_overrides_model_value_only_while_running() {
    let flicker = Animation::new(
        Track::Opacity { from: 1.0, to: 0.0 },
        Timing::looping(0.2).autoreversing().delayed(1.0),
    );
    let before = Pose::sampled(0.0, std::slice::from_ref(&flicker), 0.5);
    assert!(approx(before.opacity, 0.0));
    let during = Pose::sampled(0.0, std::slice::from_ref(&flicker), 1.0);
    assert!(approx(during.opacity, 1.0));
}

#[test]
fn translate_and_rotate_compose_in_place() {
    let animations = [
        Animation::new(Track::Translate(Point::new(0.0, 100.0)), Timing::looping(1.0)),
        Animation::new(Track::Rotate(1.0), Timing::looping(4.0)),
    ];
    let pose = Pose::sampled(1.0, &animations, 0.25);
    assert!(approx(pose.offset.y, 25.0));
    assert!(approx(pose.rotation, std::f32::consts::TAU / 16.0));

    let placed = Pose::at_rest(1.0).place(Point::new(10.0, 10.0), Point::new(5.0, 0.0));
    assert_eq!(placed, Point::new(15.0, 10.0));
}
