use super::*;

fn gate() -> TransitionGate {
    TransitionGate::new(Duration::from_millis(495))
}

#[test]
fn starts_idle_with_nothing_displayed() {
    let g = gate();
    assert!(g.is_idle());
    assert_eq!(g.last_displayed(), None);
}

#[test]
fn second_admission_rejected_while_in_flight() {
    let mut g = gate();
    let t = g.admit(FrameIndex(2)).unwrap();
    assert!(g.admit(FrameIndex(3)).is_none());
    assert!(g.admit(FrameIndex(2)).is_none());

    g.load_completed(t, Millis(100)).unwrap();
    assert!(g.admit(FrameIndex(3)).is_none());
}

#[test]
fn displayed_index_moves_only_on_completion() {
    let mut g = gate();
    let t = g.admit(FrameIndex(4)).unwrap();
    assert_eq!(g.last_displayed(), None);
    assert_eq!(
        g.load_completed(t, Millis(10)),
        Some((FrameIndex(4), Millis(505)))
    );
    assert_eq!(g.last_displayed(), Some(FrameIndex(4)));
}

#[test]
fn cooldown_never_releases_early() {
    let mut g = gate();
    let t = g.admit(FrameIndex(1)).unwrap();
    g.load_completed(t, Millis(1000)).unwrap();

    assert!(!g.cooldown_elapsed(t, Millis(1494)));
    assert!(!g.is_idle());
    assert!(g.cooldown_elapsed(t, Millis(1495)));
    assert!(g.is_idle());
}

#[test]
fn load_failure_releases_immediately() {
    let mut g = gate();
    let t = g.admit(FrameIndex(1)).unwrap();
    assert!(g.load_failed(t));
    assert!(g.is_idle());
    assert_eq!(g.last_displayed(), None);
    assert!(g.admit(FrameIndex(1)).is_some());
}

#[test]
fn stale_tickets_are_ignored() {
    let mut g = gate();
    let old = g.admit(FrameIndex(1)).unwrap();
    assert!(g.load_failed(old));

    let cur = g.admit(FrameIndex(3)).unwrap();
    assert_ne!(old, cur);
    assert_eq!(g.load_completed(old, Millis(5)), None);
    assert!(!g.load_failed(old));
    assert_eq!(g.last_displayed(), None);

    g.load_completed(cur, Millis(5)).unwrap();
    assert!(!g.cooldown_elapsed(old, Millis(10_000)));
    assert!(!g.is_idle());
}

#[test]
fn completion_after_cooldown_started_is_ignored() {
    let mut g = gate();
    let t = g.admit(FrameIndex(0)).unwrap();
    g.load_completed(t, Millis(0)).unwrap();
    assert_eq!(g.load_completed(t, Millis(1)), None);
    assert!(!g.load_failed(t));
    match g.state() {
        TransitionState::InTransition { phase, .. } => {
            assert_eq!(
                phase,
                TransitionPhase::Cooldown {
                    until: Millis(495)
                }
            )
        }
        TransitionState::Idle => panic!("gate released early"),
    }
}
