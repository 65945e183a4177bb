use super::*;

#[test]
fn tilt_parity_uses_magnitude() {
    assert!(TiltReading(0).is_even());
    assert!(TiltReading(-4).is_even());
    assert!(!TiltReading(-3).is_even());
    assert!(!TiltReading(7).is_even());
}

#[test]
fn millis_arithmetic_saturates() {
    let t = Millis(10).saturating_add(Duration::from_millis(495));
    assert_eq!(t, Millis(505));
    assert_eq!(
        Millis(u64::MAX - 1).saturating_add(Duration::from_secs(1)),
        Millis(u64::MAX)
    );
}

#[test]
fn viewport_orientation() {
    assert_eq!(Viewport::new(390, 844).orientation(), Orientation::Portrait);
    assert_eq!(Viewport::new(844, 390).orientation(), Orientation::Landscape);
    assert_eq!(Viewport::new(500, 500).orientation(), Orientation::Landscape);
}
