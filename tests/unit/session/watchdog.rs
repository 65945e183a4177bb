use super::*;

const GRACE: Duration = Duration::from_millis(1000);

#[test]
fn reports_no_signal_once() {
    let mut w = LivenessWatchdog::arm(Millis(0), GRACE);
    assert_eq!(w.expire(Millis(999)), WatchdogVerdict::Pending);
    assert_eq!(w.expire(Millis(1000)), WatchdogVerdict::NoSignal);
    assert_eq!(w.expire(Millis(5000)), WatchdogVerdict::Pending);
}

#[test]
fn sample_just_before_deadline_keeps_it_quiet() {
    let mut w = LivenessWatchdog::arm(Millis(200), GRACE);
    assert_eq!(w.deadline(), Millis(1200));
    assert!(w.observe_valid_sample());
    assert!(!w.observe_valid_sample());
    assert_eq!(w.expire(Millis(1200)), WatchdogVerdict::Alive);
}

#[test]
fn flag_is_never_reset() {
    let mut w = LivenessWatchdog::arm(Millis(0), GRACE);
    w.observe_valid_sample();
    w.expire(Millis(1000));
    assert!(w.signal_seen());
}
