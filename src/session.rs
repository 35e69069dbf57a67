/// One timed phase of the pomodoro cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum SessionType {
    #[strum(serialize = "FOCUS TIME")]
    Study,
    #[strum(serialize = "SHORT BREAK")]
    Break,
    #[strum(serialize = "LONG BREAK")]
    LongBreak,
}

impl SessionType {
    pub const ALL: [SessionType; 3] = [
        SessionType::Study,
        SessionType::Break,
        SessionType::LongBreak,
    ];

    /// Key used to select this kind in the configuration overlay
    pub fn config_key(&self) -> char {
        match self {
            SessionType::Study => 's',
            SessionType::Break => 'b',
            SessionType::LongBreak => 'l',
        }
    }

    pub fn from_config_key(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.config_key() == c)
    }

    /// Message announcing that `next` begins after this session
    pub fn transition_notification(&self, next: SessionType) -> Notification {
        match (self, next) {
            (SessionType::Study, SessionType::LongBreak) => {
                Notification::new("🎯 Focus Session Complete", "Time for a long break!")
            }
            (SessionType::Study, _) => {
                Notification::new("🎯 Focus Session Complete", "Time for a short break.")
            }
            (SessionType::Break, _) => Notification::new("☕ Break Over", "Ready to focus again?"),
            (SessionType::LongBreak, _) => {
                Notification::new("🌟 Long Break Over", "Let's get back to work!")
            }
        }
    }
}

/// A desktop notification request, delivered best-effort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}
