use std::time::Duration;

use crate::config::MINUTE;
use crate::session::SessionType;

/// Length of one tick of the countdown
pub const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Time remains; another tick should follow
    Running,
    /// The session ran out on this tick
    Expired,
    /// Paused, nothing changed
    Ignored,
}

/// Countdown state of the session in progress.
///
/// `time_left` is only ever zero transiently, on the tick that expires the
/// session; the owner is expected to start the next session right away.
/// It may exceed `initial_duration` after manual increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub current_session: SessionType,
    pub initial_duration: Duration,
    pub time_left: Duration,
    pub paused: bool,
}

impl TimerState {
    pub fn new(session: SessionType, duration: Duration) -> Self {
        Self {
            current_session: session,
            initial_duration: duration,
            time_left: duration,
            paused: false,
        }
    }

    /// Start `session` from the top. The pause flag carries over.
    pub fn begin(&mut self, session: SessionType, duration: Duration) {
        self.current_session = session;
        self.initial_duration = duration;
        self.time_left = duration;
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.paused {
            return TickOutcome::Ignored;
        }
        self.time_left = self.time_left.saturating_sub(TICK);
        if self.time_left.is_zero() {
            TickOutcome::Expired
        } else {
            TickOutcome::Running
        }
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Add or remove whole minutes of remaining time while running.
    /// Refuses when paused, or when the result would fall under one minute.
    pub fn adjust_time(&mut self, minutes: i64) -> bool {
        if self.paused {
            return false;
        }
        let delta = MINUTE * minutes.unsigned_abs() as u32;
        let updated = if minutes >= 0 {
            self.time_left.checked_add(delta)
        } else {
            self.time_left.checked_sub(delta).filter(|d| *d >= MINUTE)
        };
        match updated {
            Some(d) => {
                self.time_left = d;
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.time_left = self.initial_duration;
    }

    /// Re-base the target length without touching the remaining time
    pub fn rebase(&mut self, duration: Duration) {
        self.initial_duration = duration;
    }

    /// Share of the session already elapsed, clamped to [0, 1]
    pub fn progress(&self) -> f64 {
        if self.initial_duration.is_zero() {
            return 1.0;
        }
        let initial = self.initial_duration.as_secs_f64();
        let elapsed = initial - self.time_left.as_secs_f64();
        (elapsed / initial).clamp(0.0, 1.0)
    }

    /// Remaining time as (total minutes, seconds)
    pub fn clock(&self) -> (u64, u64) {
        let secs = self.time_left.as_secs();
        (secs / 60, secs % 60)
    }
}
