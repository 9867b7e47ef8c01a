use super::*;

#[test]
fn new_countdown_is_stopped() {
    let countdown = Countdown::new();
    assert!(!countdown.is_running());
    assert_eq!(countdown.remaining(), 0);
}

#[test]
fn tick_decrements_while_running() {
    let mut countdown = Countdown::new();
    countdown.start(3);
    assert_eq!(countdown.tick(), Some(2));
    assert_eq!(countdown.tick(), Some(1));
    assert!(countdown.is_running());
}

#[test]
fn reaching_zero_stops() {
    let mut countdown = Countdown::new();
    countdown.start(2);
    countdown.tick();
    assert_eq!(countdown.tick(), Some(0));
    assert!(!countdown.is_running());
    assert_eq!(countdown.tick(), None);
    assert_eq!(countdown.remaining(), 0);
}

#[test]
fn halt_zeroes_and_stops() {
    let mut countdown = Countdown::new();
    countdown.start(60);
    countdown.tick();
    countdown.halt();
    assert_eq!(countdown.remaining(), 0);
    assert_eq!(countdown.tick(), None);
}

#[test]
fn restart_after_halt() {
    let mut countdown = Countdown::new();
    countdown.start(5);
    countdown.halt();
    countdown.start(60);
    assert_eq!(countdown.tick(), Some(59));
}

#[test]
fn start_at_zero_does_not_run() {
    let mut countdown = Countdown::new();
    countdown.start(0);
    assert!(!countdown.is_running());
    assert_eq!(countdown.tick(), None);
}
