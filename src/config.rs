use std::time::Duration;

use crate::session::SessionType;

pub const MINUTE: Duration = Duration::from_secs(60);

pub const DEFAULT_STUDY_MINS: u64 = 25;
pub const DEFAULT_BREAK_MINS: u64 = 5;
pub const DEFAULT_LONG_BREAK_MINS: u64 = 15;

/// Configured length of each session kind. Never below one minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub study: Duration,
    pub short_break: Duration,
    pub long_break: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_minutes(
            DEFAULT_STUDY_MINS,
            DEFAULT_BREAK_MINS,
            DEFAULT_LONG_BREAK_MINS,
        )
    }
}

impl Config {
    /// Zero minutes is raised to the one-minute floor.
    pub fn from_minutes(study: u64, short_break: u64, long_break: u64) -> Self {
        let mins = |m: u64| MINUTE * m.max(1) as u32;
        Self {
            study: mins(study),
            short_break: mins(short_break),
            long_break: mins(long_break),
        }
    }

    pub fn duration_for(&self, kind: SessionType) -> Duration {
        match kind {
            SessionType::Study => self.study,
            SessionType::Break => self.short_break,
            SessionType::LongBreak => self.long_break,
        }
    }

    fn slot_mut(&mut self, kind: SessionType) -> &mut Duration {
        match kind {
            SessionType::Study => &mut self.study,
            SessionType::Break => &mut self.short_break,
            SessionType::LongBreak => &mut self.long_break,
        }
    }

    /// Grow or shrink the duration for `kind` by `minutes`.
    /// Returns false (and leaves the value alone) if the result would drop below one minute.
    pub fn adjust(&mut self, kind: SessionType, minutes: i64) -> bool {
        let slot = self.slot_mut(kind);
        let delta = MINUTE * minutes.unsigned_abs() as u32;
        let updated = if minutes >= 0 {
            slot.checked_add(delta)
        } else {
            slot.checked_sub(delta)
        };

        match updated {
            Some(d) if d >= MINUTE => {
                *slot = d;
                true
            }
            _ => false,
        }
    }
}
