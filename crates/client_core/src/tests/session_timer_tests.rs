use super::*;

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

#[test]
fn new_timer_is_idle_with_full_session() {
    let timer = SessionTimer::new();
    assert_eq!(timer.remaining_secs(), SESSION_LENGTH_SECS);
    assert!(!timer.is_running());
    assert!(!timer.is_ticking());
    assert_eq!(timer.state(), TimerState::Idle);
    assert_eq!(timer.display(), "01:00:00");
}

#[test]
fn idle_timer_does_not_tick() {
    let t0 = Instant::now();
    let mut timer = SessionTimer::new();
    assert_eq!(timer.advance(t0 + secs(30)), 0);
    assert_eq!(timer.remaining_secs(), SESSION_LENGTH_SECS);
}

#[test]
fn running_timer_loses_one_second_per_elapsed_second() {
    let t0 = Instant::now();
    let mut timer = SessionTimer::new();
    timer.start(t0);
    assert_eq!(timer.state(), TimerState::Running);

    assert_eq!(timer.advance(t0 + Duration::from_millis(999)), 0);
    assert_eq!(timer.remaining_secs(), 3600);

    assert_eq!(timer.advance(t0 + secs(1)), 1);
    assert_eq!(timer.remaining_secs(), 3599);

    assert_eq!(timer.advance(t0 + secs(61)), 60);
    assert_eq!(timer.remaining_secs(), 3539);
    assert_eq!(timer.display(), "00:58:59");
}

#[test]
fn start_resets_countdown_from_any_value() {
    let t0 = Instant::now();
    let mut timer = SessionTimer::new();
    timer.start(t0);
    timer.advance(t0 + secs(125));
    assert_eq!(timer.remaining_secs(), 3475);

    let restart_at = t0 + secs(125) + Duration::from_millis(400);
    timer.start(restart_at);
    assert_eq!(timer.remaining_secs(), SESSION_LENGTH_SECS);
    assert!(timer.is_running());
    assert_eq!(timer.next_tick_at(), Some(restart_at + TICK_PERIOD));

    // Only the re-armed cadence ticks; the old one's boundary at t0+126 is gone.
    assert_eq!(timer.advance(t0 + secs(126)), 0);
    assert_eq!(timer.advance(restart_at + secs(10)), 10);
    assert_eq!(timer.remaining_secs(), 3590);
}

#[test]
fn reset_returns_to_idle_full_session() {
    let t0 = Instant::now();
    let mut timer = SessionTimer::new();
    timer.start(t0);
    timer.advance(t0 + secs(42));
    timer.reset();
    assert_eq!(timer.remaining_secs(), SESSION_LENGTH_SECS);
    assert!(!timer.is_running());
    assert!(!timer.is_ticking());
    assert_eq!(timer.advance(t0 + secs(100)), 0);

    let mut untouched = SessionTimer::new();
    untouched.reset();
    assert_eq!(untouched.remaining_secs(), SESSION_LENGTH_SECS);
    assert_eq!(untouched.state(), TimerState::Idle);
}

#[test]
fn countdown_stops_exactly_at_zero_and_stays_flagged_running() {
    let t0 = Instant::now();
    let mut timer = SessionTimer::new();
    timer.start(t0);

    assert_eq!(timer.advance(t0 + secs(3600)), 3600);
    assert_eq!(timer.remaining_secs(), 0);
    assert!(timer.is_running());
    assert!(!timer.is_ticking());
    assert_eq!(timer.next_tick_at(), None);
    assert_eq!(timer.state(), TimerState::Expired);
    assert_eq!(timer.display(), "00:00:00");

    assert_eq!(timer.advance(t0 + secs(7200)), 0);
    assert_eq!(timer.remaining_secs(), 0);
}

#[test]
fn late_advance_catches_up_but_never_passes_zero() {
    let t0 = Instant::now();
    let mut timer = SessionTimer::new();
    timer.start(t0);
    assert_eq!(timer.advance(t0 + secs(5000)), 3600);
    assert_eq!(timer.remaining_secs(), 0);
}

#[test]
fn expired_timer_can_be_restarted() {
    let t0 = Instant::now();
    let mut timer = SessionTimer::new();
    timer.start(t0);
    timer.advance(t0 + secs(3600));

    let later = t0 + secs(4000);
    timer.start(later);
    assert_eq!(timer.state(), TimerState::Running);
    assert_eq!(timer.advance(later + secs(1)), 1);
    assert_eq!(timer.remaining_secs(), 3599);
}

#[test]
fn timers_are_independent() {
    let t0 = Instant::now();
    let mut first = SessionTimer::new();
    let mut second = SessionTimer::new();

    first.start(t0);
    first.advance(t0 + secs(10));
    second.advance(t0 + secs(10));

    assert_eq!(first.remaining_secs(), 3590);
    assert_eq!(second.remaining_secs(), SESSION_LENGTH_SECS);
    assert!(!second.is_running());

    second.start(t0 + secs(10));
    first.reset();
    second.advance(t0 + secs(13));
    assert_eq!(first.remaining_secs(), SESSION_LENGTH_SECS);
    assert_eq!(second.remaining_secs(), 3597);
}

#[test]
fn formats_hours_minutes_seconds() {
    assert_eq!(format_hms(3661), "01:01:01");
    assert_eq!(format_hms(0), "00:00:00");
    assert_eq!(format_hms(59), "00:00:59");
    assert_eq!(format_hms(3600), "01:00:00");
    assert_eq!(format_hms(360_000), "100:00:00");
}

#[test]
fn formats_negative_values_with_leading_sign() {
    assert_eq!(format_hms(-1), "-00:00:01");
    assert_eq!(format_hms(-3661), "-01:01:01");
}
