use std::time::Duration;

/// Number of completed study sessions between long breaks
pub const LONG_BREAK_INTERVAL: u32 = 4;

/// Counters for the current run. Lives for the whole process, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub study_sessions_started: u32,
    pub study_sessions_completed: u32,
    pub total_study_time: Duration,
    pub sessions_until_long_break: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            study_sessions_started: 0,
            study_sessions_completed: 0,
            total_study_time: Duration::ZERO,
            sessions_until_long_break: LONG_BREAK_INTERVAL,
        }
    }
}

impl Stats {
    /// Account for a finished study session. `configured` is the study length
    /// from the config, not the wall-clock time spent.
    pub fn record_study_completion(&mut self, configured: Duration) {
        self.study_sessions_started += 1;
        self.study_sessions_completed += 1;
        self.total_study_time += configured;
        self.sessions_until_long_break = self.sessions_until_long_break.saturating_sub(1);
    }

    pub fn long_break_due(&self) -> bool {
        self.sessions_until_long_break == 0
    }

    pub fn start_long_break(&mut self) {
        self.sessions_until_long_break = LONG_BREAK_INTERVAL;
    }
}

/// `1h5m` for an hour or more, `42m` otherwise
pub fn format_total(d: Duration) -> String {
    let total_mins = d.as_secs() / 60;
    let hours = total_mins / 60;
    let minutes = total_mins % 60;
    if hours > 0 {
        format!("{hours}h{minutes}m")
    } else {
        format!("{minutes}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MINUTE;

    #[test]
    fn test_default_stats() {
        let stats = Stats::default();
        assert_eq!(stats.study_sessions_started, 0);
        assert_eq!(stats.study_sessions_completed, 0);
        assert_eq!(stats.total_study_time, Duration::ZERO);
        assert_eq!(stats.sessions_until_long_break, 4);
        assert!(!stats.long_break_due());
    }

    #[test]
    fn test_record_study_completion() {
        let mut stats = Stats::default();
        stats.record_study_completion(MINUTE * 25);
        assert_eq!(stats.study_sessions_started, 1);
        assert_eq!(stats.study_sessions_completed, 1);
        assert_eq!(stats.total_study_time, MINUTE * 25);
        assert_eq!(stats.sessions_until_long_break, 3);
    }

    #[test]
    fn test_long_break_due_after_interval() {
        let mut stats = Stats::default();
        for _ in 0..3 {
            stats.record_study_completion(MINUTE);
            assert!(!stats.long_break_due());
        }
        stats.record_study_completion(MINUTE);
        assert!(stats.long_break_due());

        stats.start_long_break();
        assert_eq!(stats.sessions_until_long_break, LONG_BREAK_INTERVAL);
        assert_eq!(stats.study_sessions_completed, 4);
    }

    #[test]
    fn test_format_total() {
        assert_eq!(format_total(Duration::ZERO), "0m");
        assert_eq!(format_total(MINUTE * 25), "25m");
        assert_eq!(format_total(MINUTE * 60), "1h0m");
        assert_eq!(format_total(MINUTE * 125), "2h5m");
        assert_eq!(format_total(Duration::from_secs(59)), "0m");
    }
}
