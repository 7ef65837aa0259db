use {
  super::*,
  rstest::rstest
};

const EPS: f64 = 1e-12;

#[rstest]
#[case(ScaleMode::Linear)]
#[case(ScaleMode::EaseIn)]
#[case(ScaleMode::EaseOut)]
#[case(ScaleMode::EaseInOut)]
fn curves_span_unit_interval(#[case] mode: ScaleMode) {
  for power in [0.5, 1.0, 2.0, 3.5] {
    assert!((mode.ease(0.0, power) - 0.0).abs() < EPS, "{:?} at 0, power {}", mode, power);
    assert!((mode.ease(1.0, power) - 1.0).abs() < EPS, "{:?} at 1, power {}", mode, power);
  }
}

#[rstest]
#[case(ScaleMode::Linear)]
#[case(ScaleMode::EaseIn)]
#[case(ScaleMode::EaseOut)]
#[case(ScaleMode::EaseInOut)]
fn curves_are_monotonic(#[case] mode: ScaleMode) {
  let mut prev = f64::MIN;
  for i in 0..=100 {
    let v = mode.ease(i as f64 / 100.0, 2.0);
    assert!(v >= prev - EPS);
    prev = v;
  }
}

#[test] fn ease_in_out_is_point_symmetric() {
  for power in [1.5, 2.0, 4.0] {
    let a = ease_in_out(0.2, power);
    let b = ease_in_out(0.8, power);
    assert!((a + b - 1.0).abs() < EPS);
  }
  assert!((ease_in_out(0.5, 3.0) - 0.5).abs() < EPS);
}

#[test] fn step_threshold_is_strict() {
  assert_eq!(ScaleMode::Step.ease(0.5, 7.0), 0.0);
  assert_eq!(ScaleMode::Step.ease(0.500001, 7.0), 1.0);
  assert_eq!(ScaleMode::Step.ease(0.0, 7.0), 0.0);
  assert_eq!(ScaleMode::Step.ease(1.0, 7.0), 1.0);
}

#[test] fn swirl_oscillates_around_half() {
  assert!((ScaleMode::Swirl.ease(0.0, 1.0) - 0.5).abs() < EPS);
  assert!((ScaleMode::Swirl.ease(0.5, 1.0) - 1.0).abs() < EPS);
  assert!((ScaleMode::Swirl.ease(0.5, 3.0) - 0.0).abs() < EPS);
}

#[test] fn none_is_flat() {
  assert_eq!(ScaleMode::None.ease(0.0, 2.0), 1.0);
  assert_eq!(ScaleMode::None.ease(0.37, 2.0), 1.0);
}

#[test] fn rotation_curves() {
  assert_eq!(RotateMode::None.ease(0.3), None);
  assert_eq!(RotateMode::Linear.ease(0.3), Some(0.3));
  assert!((RotateMode::EaseIn.ease(0.5).unwrap() - 0.25).abs() < EPS);
  assert!((RotateMode::EaseOut.ease(0.5).unwrap() - 0.75).abs() < EPS);
}

#[test] fn generic_over_f32() {
  assert_eq!(ease_in(0.5f32, 2.0), 0.25);
  assert_eq!(step(0.75f32), 1.0);
}
