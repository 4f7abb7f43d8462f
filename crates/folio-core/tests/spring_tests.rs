// Host-side tests for the smoothing spring.

use folio_core::*;

const FRAME: f64 = 1.0 / 60.0;

#[test]
fn critically_damped_has_unit_ratio() {
    let cfg = SpringConfig::critically_damped(300.0);
    assert!((cfg.damping_ratio() - 1.0).abs() < 1e-12);
    assert!(cfg.damping > 0.0);
}

#[test]
fn new_spring_is_settled_at_zero() {
    let mut s = Spring::new(SpringConfig::critically_damped(100.0));
    assert!(s.is_settled());
    assert_eq!(s.step(FRAME), 0.0);
}

#[test]
fn approaches_target_without_overshoot() {
    let mut s = Spring::new(SpringConfig::critically_damped(300.0));
    s.set_target(10.0);
    let mut prev = 0.0;
    for _ in 0..120 {
        let v = s.step(FRAME);
        assert!(v >= prev - 1e-9, "went backwards: {prev} -> {v}");
        assert!(v <= 10.0 + 1e-9, "overshot: {v}");
        prev = v;
    }
    assert_eq!(s.value, 10.0);
    assert!(s.is_settled());
}

#[test]
fn long_frames_stay_stable() {
    let mut s = Spring::new(SpringConfig::critically_damped(300.0));
    s.set_target(-15.0);
    for _ in 0..50 {
        let v = s.step(2.0);
        assert!(v.is_finite());
        assert!(v.abs() <= 15.0 + 1e-9);
    }
    assert_eq!(s.value, -15.0);
}

#[test]
fn non_positive_or_nan_dt_is_ignored() {
    let mut s = Spring::new(SpringConfig::critically_damped(100.0));
    s.set_target(5.0);
    assert_eq!(s.step(0.0), 0.0);
    assert_eq!(s.step(-1.0), 0.0);
    assert_eq!(s.step(f64::NAN), 0.0);
}

#[test]
fn snap_clears_motion() {
    let mut s = Spring::new(SpringConfig::critically_damped(100.0));
    s.set_target(5.0);
    s.step(FRAME);
    assert!(s.velocity > 0.0);
    s.snap_to(0.0);
    assert!(s.is_settled());
    assert_eq!(s.value, 0.0);
}
