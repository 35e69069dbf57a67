//! Application snapshot and the reducer that advances it.
//!
//! All state lives in [`App`]. The event loop hands each event to [`update`]
//! and gets back the next snapshot plus a list of [`Effect`]s to carry out;
//! the reducer itself never sleeps, draws, or talks to the desktop.

use tracing::{debug, trace};

use crate::config::Config;
use crate::input::{command_for_key, Command};
use crate::runtime::AppEvent;
use crate::session::{Notification, SessionType};
use crate::stats::Stats;
use crate::timer::{TickOutcome, TimerState};

/// Overlay state of the presentation layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    pub help_visible: bool,
    pub editing_config: bool,
    /// Config field under edit, `None` until the user picks one
    pub selected_field: Option<SessionType>,
}

impl UiState {
    fn close_config(&mut self) {
        self.editing_config = false;
        self.selected_field = None;
    }
}

/// Side effect requested by the reducer, executed by the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver one tick after the tick interval, replacing any pending one
    ScheduleTick,
    /// Best-effort desktop notification
    Notify(Notification),
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct App {
    pub config: Config,
    pub timer: TimerState,
    pub stats: Stats,
    pub ui: UiState,
    pub quitting: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            timer: TimerState::new(SessionType::Study, config.study),
            config,
            stats: Stats::default(),
            ui: UiState::default(),
            quitting: false,
        }
    }

    /// Leave the current session for the next one, updating stats on the way
    fn advance_session(&mut self) -> Notification {
        let from = self.timer.current_session;
        let next = match from {
            SessionType::Study => {
                self.stats.record_study_completion(self.config.study);
                if self.stats.long_break_due() {
                    self.stats.start_long_break();
                    SessionType::LongBreak
                } else {
                    SessionType::Break
                }
            }
            SessionType::Break | SessionType::LongBreak => SessionType::Study,
        };

        self.timer.begin(next, self.config.duration_for(next));
        debug!(
            target: "timer",
            from = %from,
            to = %next,
            until_long_break = self.stats.sessions_until_long_break,
            "session_transition"
        );
        from.transition_notification(next)
    }

    fn transition(&mut self) -> Vec<Effect> {
        let notification = self.advance_session();
        vec![Effect::ScheduleTick, Effect::Notify(notification)]
    }

    fn adjust_config(&mut self, minutes: i64) {
        let Some(kind) = self.ui.selected_field else {
            return;
        };
        if !self.config.adjust(kind, minutes) {
            debug!(target: "input", field = %kind, minutes, "config_adjust_rejected");
            return;
        }
        if kind == self.timer.current_session {
            self.timer.rebase(self.config.duration_for(kind));
        }
        debug!(
            target: "input",
            field = %kind,
            secs = self.config.duration_for(kind).as_secs(),
            "config_adjusted"
        );
    }
}

/// Initial snapshot for `config`, with the first tick armed
pub fn init(config: Config) -> (App, Vec<Effect>) {
    (App::new(config), vec![Effect::ScheduleTick])
}

/// Advance the snapshot by one event
pub fn update(mut app: App, event: AppEvent) -> (App, Vec<Effect>) {
    let effects = match event {
        AppEvent::Tick => on_tick(&mut app),
        AppEvent::Resize => Vec::new(),
        AppEvent::Key(key) => match command_for_key(key, &app.ui) {
            Some(command) => return apply(app, command),
            None => Vec::new(),
        },
    };
    (app, effects)
}

fn on_tick(app: &mut App) -> Vec<Effect> {
    if app.quitting {
        return Vec::new();
    }
    match app.timer.tick() {
        TickOutcome::Ignored => Vec::new(),
        TickOutcome::Running => {
            trace!(target: "timer", secs_left = app.timer.time_left.as_secs(), "tick");
            vec![Effect::ScheduleTick]
        }
        TickOutcome::Expired => app.transition(),
    }
}

/// Apply a resolved user command
pub fn apply(mut app: App, command: Command) -> (App, Vec<Effect>) {
    debug!(target: "input", ?command, "command");
    let effects = match command {
        Command::Quit => {
            app.quitting = true;
            vec![Effect::Quit]
        }
        Command::ToggleHelp => {
            app.ui.help_visible = !app.ui.help_visible;
            if !app.ui.help_visible {
                app.ui.close_config();
            }
            Vec::new()
        }
        Command::CloseHelp => {
            app.ui.help_visible = false;
            Vec::new()
        }
        Command::EnterConfigEdit => {
            app.ui.editing_config = true;
            Vec::new()
        }
        Command::ExitConfigEdit => {
            app.ui.close_config();
            Vec::new()
        }
        Command::SelectField(kind) => {
            app.ui.selected_field = Some(kind);
            Vec::new()
        }
        Command::AdjustField(minutes) => {
            app.adjust_config(minutes);
            Vec::new()
        }
        Command::TogglePause => {
            if app.timer.toggle_pause() {
                Vec::new()
            } else {
                vec![Effect::ScheduleTick]
            }
        }
        Command::AdjustTime(minutes) => {
            if !app.timer.adjust_time(minutes) {
                debug!(target: "input", minutes, "time_adjust_rejected");
            }
            Vec::new()
        }
        Command::Skip => app.transition(),
        Command::Reset => {
            app.timer.reset();
            vec![Effect::ScheduleTick]
        }
    };
    (app, effects)
}
