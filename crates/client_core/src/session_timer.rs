//! Per-card countdown of remaining usage time.
//!
//! The timer never reads the clock itself: every transition takes the current
//! `Instant`, and the owner calls [`SessionTimer::advance`] from whatever
//! periodic facility it has (a frame loop, a tokio interval).

use std::time::{Duration, Instant};

/// Length of a session granted by `start` and restored by `reset`.
pub const SESSION_LENGTH_SECS: i64 = 3600;
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    /// Still flagged running, but the countdown reached zero and stopped ticking.
    Expired,
}

/// Scheduled tick cadence. Owning one is what makes the timer tick; dropping
/// it cancels every pending tick.
#[derive(Debug)]
struct TickCadence {
    next_tick_at: Instant,
}

impl TickCadence {
    fn arm(now: Instant) -> Self {
        Self {
            next_tick_at: now + TICK_PERIOD,
        }
    }
}

#[derive(Debug)]
pub struct SessionTimer {
    remaining_secs: i64,
    running: bool,
    cadence: Option<TickCadence>,
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionTimer {
    pub fn new() -> Self {
        Self {
            remaining_secs: SESSION_LENGTH_SECS,
            running: false,
            cadence: None,
        }
    }

    /// Restarts the countdown from a full session. Any cadence already armed
    /// is released before the new one is armed.
    pub fn start(&mut self, now: Instant) {
        self.cadence = None;
        self.remaining_secs = SESSION_LENGTH_SECS;
        self.running = true;
        self.cadence = Some(TickCadence::arm(now));
    }

    pub fn reset(&mut self) {
        self.cadence = None;
        self.remaining_secs = SESSION_LENGTH_SECS;
        self.running = false;
    }

    /// Applies every tick due at or before `now` and returns how many fired.
    /// The cadence is released by the tick that brings the countdown to zero.
    pub fn advance(&mut self, now: Instant) -> u64 {
        let mut fired = 0;
        while let Some(cadence) = self.cadence.as_mut() {
            if now < cadence.next_tick_at {
                break;
            }
            cadence.next_tick_at += TICK_PERIOD;
            self.remaining_secs -= 1;
            fired += 1;
            if self.remaining_secs <= 0 {
                self.cadence = None;
            }
        }
        fired
    }

    pub fn remaining_secs(&self) -> i64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_ticking(&self) -> bool {
        self.cadence.is_some()
    }

    pub fn next_tick_at(&self) -> Option<Instant> {
        self.cadence.as_ref().map(|cadence| cadence.next_tick_at)
    }

    pub fn state(&self) -> TimerState {
        match (self.running, self.remaining_secs <= 0) {
            (false, _) => TimerState::Idle,
            (true, false) => TimerState::Running,
            (true, true) => TimerState::Expired,
        }
    }

    pub fn display(&self) -> String {
        format_hms(self.remaining_secs)
    }
}

/// Renders seconds as zero-padded `HH:MM:SS`. Negative values get a leading
/// `-` in front of the formatted magnitude.
pub fn format_hms(secs: i64) -> String {
    if secs < 0 {
        return format!("-{}", format_magnitude(secs.unsigned_abs()));
    }
    format_magnitude(secs.unsigned_abs())
}

fn format_magnitude(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
#[path = "tests/session_timer_tests.rs"]
mod tests;
