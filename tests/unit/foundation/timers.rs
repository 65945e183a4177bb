use super::*;

#[test]
fn pops_in_deadline_then_schedule_order() {
    let mut t = Timers::new();
    t.schedule(Millis(30), "c");
    t.schedule(Millis(10), "a");
    t.schedule(Millis(10), "b");
    t.schedule(Millis(50), "late");

    assert_eq!(t.next_deadline(), Some(Millis(10)));
    assert_eq!(t.pop_due(Millis(30)), vec!["a", "b", "c"]);
    assert_eq!(t.next_deadline(), Some(Millis(50)));
    assert!(t.pop_due(Millis(49)).is_empty());
    assert_eq!(t.pop_due(Millis(50)), vec!["late"]);
    assert_eq!(t.next_deadline(), None);
}

#[test]
fn tasks_scheduled_in_the_past_fire_on_next_poll() {
    let mut t = Timers::new();
    t.schedule(Millis(5), 1);
    assert_eq!(t.pop_due(Millis(100)), vec![1]);
    assert!(t.pop_due(Millis(100)).is_empty());
}
