//! Behavioral properties of the channel smoothers

use hand_gesture_control::filters::{AdaptiveSmoother, AdaptiveSmootherParams, ScalarSmoother, Smoother};
use hand_gesture_control::landmarks::Point2;

#[test]
fn test_scalar_converges_to_fixed_point() {
    let mut filter = ScalarSmoother::new(0.1, 0.003);
    filter.update(0.0);

    let mut out = 0.0;
    for _ in 0..1000 {
        out = filter.update(0.8);
    }
    assert!((out - 0.8).abs() <= 0.0031, "output {out} not within dead-zone of target");

    // Further identical inputs leave the output untouched
    for _ in 0..50 {
        assert_eq!(filter.update(0.8).to_bits(), out.to_bits());
    }
}

#[test]
fn test_scalar_dead_zone_repeats_output_verbatim() {
    let mut filter = ScalarSmoother::new(0.12, 0.004);
    let first = filter.update(0.5);

    for target in [0.503, 0.4985, 0.5025, 0.501] {
        let out = filter.update(target);
        assert_eq!(out.to_bits(), first.to_bits());
    }
}

#[test]
fn test_scalar_reset_reinitializes() {
    let mut filter = ScalarSmoother::new(0.1, 0.003);
    for target in [0.1, 0.9, 0.4, 0.7] {
        filter.update(target);
    }

    filter.reset();
    assert!(!filter.is_initialized());
    assert_eq!(filter.update(0.33), 0.33);
}

#[test]
fn test_adaptive_reset_reinitializes() {
    let mut filter = AdaptiveSmoother::default();
    filter.update(Point2::new(0.9, 0.9));
    filter.update(Point2::new(-0.9, 0.2));

    filter.reset();
    let target = Point2::new(0.12, -0.44);
    assert_eq!(filter.update(target), target);
}

#[test]
fn test_adaptive_converges_to_still_target() {
    let mut filter = AdaptiveSmoother::default();
    filter.update(Point2::new(-0.5, 0.5));

    let target = Point2::new(0.3, -0.2);
    let mut out = Point2::default();
    for _ in 0..500 {
        out = filter.update(target);
    }
    assert!(out.distance(&target) < filter.params().dead_zone);

    // Fixed point
    assert_eq!(filter.update(target), out);
}

#[test]
fn test_adaptive_never_teleports() {
    let mut filter = AdaptiveSmoother::default();
    let bound = filter.max_step() + 1e-12;
    let mut previous = filter.update(Point2::new(0.0, 0.0));

    for _ in 0..1000 {
        let target = Point2::new(rand::random::<f64>() * 2.0 - 1.0, rand::random::<f64>() * 2.0 - 1.0);
        let out = filter.update(target);
        assert!((out.x - previous.x).abs() <= bound);
        assert!((out.y - previous.y).abs() <= bound);
        previous = out;
    }
}

#[test]
fn test_adaptive_returns_copy() {
    let mut filter = AdaptiveSmoother::default();
    let mut out = filter.update(Point2::new(0.2, 0.2));

    // Mutating the returned value must not touch the filter state
    out.x = 100.0;
    assert_eq!(filter.position(), Some(Point2::new(0.2, 0.2)));
    let _ = out;
}

#[test]
fn test_slow_motion_is_smoothed_harder() {
    let params = AdaptiveSmootherParams::default();

    let mut slow = AdaptiveSmoother::new(params);
    slow.update(Point2::default());
    let slow_out = slow.update(Point2::new(0.02, 0.0));

    let mut fast = AdaptiveSmoother::new(params);
    fast.update(Point2::default());
    let fast_out = fast.update(Point2::new(0.1, 0.0));

    assert!(slow_out.x / 0.02 < fast_out.x / 0.1);
    assert!(slow_out.x / 0.02 >= params.min_alpha);
    assert!(fast_out.x / 0.1 <= params.max_alpha);
}

#[test]
fn test_separate_instances_do_not_share_state() {
    let mut right = AdaptiveSmoother::default();
    let mut left = AdaptiveSmoother::default();
    let mut reference = AdaptiveSmoother::default();

    for i in 0..100 {
        let t = f64::from(i) * 0.1;
        let right_target = Point2::new(0.3 * t.sin(), 0.2);
        let left_target = Point2::new(-0.8 * t.cos(), 0.9 * t.sin());

        let right_out = right.update(right_target);
        left.update(left_target);
        let reference_out = reference.update(right_target);

        assert_eq!(right_out, reference_out);
    }
}
