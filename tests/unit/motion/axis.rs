use super::*;

const PORTRAIT: Viewport = Viewport {
    width: 390,
    height: 844,
};
const LANDSCAPE: Viewport = Viewport {
    width: 844,
    height: 390,
};

#[test]
fn portrait_uses_x_axis() {
    let s = MotionSample::with_gravity(GravityVector::new(-3.9, 8.7, 1.0));
    assert_eq!(resolve_tilt(&s, PORTRAIT), Ok(TiltReading(-3)));
}

#[test]
fn landscape_uses_y_axis() {
    let s = MotionSample::with_gravity(GravityVector::new(-3.9, 8.7, 1.0));
    assert_eq!(resolve_tilt(&s, LANDSCAPE), Ok(TiltReading(8)));
}

#[test]
fn truncates_toward_zero() {
    for (x, want) in [(4.99, 4), (-4.99, -4), (0.4, 0), (-0.4, 0), (2.0, 2)] {
        let s = MotionSample::with_gravity(GravityVector::new(x, 0.0, 0.0));
        assert_eq!(resolve_tilt(&s, PORTRAIT), Ok(TiltReading(want)), "x = {x}");
    }
}

#[test]
fn missing_axis_defaults_to_zero() {
    let g = GravityVector {
        x: None,
        y: Some(5.0),
        z: None,
    };
    let s = MotionSample::with_gravity(g);
    assert_eq!(resolve_tilt(&s, PORTRAIT), Ok(TiltReading(0)));
    assert_eq!(resolve_tilt(&s, LANDSCAPE), Ok(TiltReading(5)));
}

#[test]
fn missing_gravity_is_rejected() {
    assert_eq!(
        resolve_tilt(&MotionSample::without_gravity(), PORTRAIT),
        Err(TiltReject::NoGravity)
    );
    assert!(!MotionSample::without_gravity().is_valid());
}

#[test]
fn nan_reads_as_zero_and_infinity_is_rejected() {
    let s = MotionSample::with_gravity(GravityVector::new(f64::NAN, 0.0, 0.0));
    assert_eq!(resolve_tilt(&s, PORTRAIT), Ok(TiltReading(0)));

    for inf in [f64::INFINITY, f64::NEG_INFINITY] {
        let s = MotionSample::with_gravity(GravityVector::new(inf, 0.0, 0.0));
        assert_eq!(resolve_tilt(&s, PORTRAIT), Err(TiltReject::NonFinite));
        let s = MotionSample::with_gravity(GravityVector::new(0.0, inf, 0.0));
        assert_eq!(resolve_tilt(&s, LANDSCAPE), Err(TiltReject::NonFinite));
        assert_eq!(resolve_tilt(&s, PORTRAIT), Ok(TiltReading(0)));
    }
}

#[test]
fn huge_finite_axis_saturates() {
    let s = MotionSample::with_gravity(GravityVector::new(f64::MAX, 0.0, 0.0));
    assert_eq!(resolve_tilt(&s, PORTRAIT), Ok(TiltReading(i64::MAX)));
}
