use std::cell::RefCell;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use tomat::app::{self, Effect};
use tomat::config::{Config, MINUTE};
use tomat::event_loop::run_app;
use tomat::notifier::{Notifier, SilentNotifier};
use tomat::runtime::{AppEvent, FixedTicker, Runner, TestEventSource};
use tomat::session::{Notification, SessionType};

#[derive(Default)]
struct RecordingNotifier {
    sent: RefCell<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.sent.borrow_mut().push(notification.clone());
    }
}

fn key(c: char) -> AppEvent {
    AppEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

// Headless run of the real event loop against ratatui's TestBackend
#[test]
fn event_loop_skips_and_quits() {
    let (tx, rx) = mpsc::channel();
    for c in ['n', 'n', 'n', 'q'] {
        tx.send(key(c)).unwrap();
    }

    let mut runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_secs(60)),
    );
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let notifier = RecordingNotifier::default();

    let app = run_app(&mut terminal, &mut runner, &notifier, Config::default()).unwrap();

    assert!(app.quitting);
    assert_eq!(app.timer.current_session, SessionType::Break);
    assert_eq!(app.stats.study_sessions_completed, 2);
    assert_eq!(app.stats.sessions_until_long_break, 2);

    let sent = notifier.sent.borrow();
    let titles: Vec<&str> = sent.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "🎯 Focus Session Complete",
            "☕ Break Over",
            "🎯 Focus Session Complete"
        ]
    );

    let content: String = terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|c| c.symbol())
        .collect();
    assert!(content.contains("Thanks for staying focused!"));
}

#[test]
fn event_loop_reports_closed_input() {
    let (tx, rx) = mpsc::channel::<AppEvent>();
    drop(tx);
    let mut runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(1)),
    );
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

    let result = run_app(&mut terminal, &mut runner, &SilentNotifier, Config::default());
    assert!(result.is_err());
}

// Real (millisecond) ticks from the runner drive a one-minute study session to its end
#[test]
fn ticks_from_runner_complete_a_session() {
    let (_tx, rx) = mpsc::channel();
    let mut runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(1)),
    );

    let (mut app, effects) = app::init(Config::from_minutes(1, 2, 3));
    assert_eq!(effects, vec![Effect::ScheduleTick]);
    runner.schedule_tick();

    let mut ticks = 0;
    for _ in 0..1000u32 {
        let event = runner.step().unwrap();
        if matches!(event, AppEvent::Tick) {
            ticks += 1;
        }
        let (next, effects) = app::update(app, event);
        app = next;
        for effect in effects {
            if effect == Effect::ScheduleTick {
                runner.schedule_tick();
            }
        }
        if app.timer.current_session == SessionType::Break {
            break;
        }
    }

    assert_eq!(ticks, 60);
    assert_eq!(app.timer.current_session, SessionType::Break);
    assert_eq!(app.timer.time_left, MINUTE * 2);
    assert_eq!(app.stats.total_study_time, MINUTE);
}

// Pausing lets the pending tick drain without re-arming, so the chain stops
#[test]
fn pause_stops_the_tick_chain() {
    let (tx, rx) = mpsc::channel();
    let mut runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(1)),
    );
    let (app, _) = app::init(Config::default());
    runner.schedule_tick();

    tx.send(key('p')).unwrap();
    let event = runner.step().unwrap();
    let (app, effects) = app::update(app, event);
    assert!(app.timer.paused);
    assert!(effects.is_empty());

    // the tick armed before the pause still arrives, and is ignored
    let event = runner.step().unwrap();
    assert!(matches!(event, AppEvent::Tick));
    let (app, effects) = app::update(app, event);
    assert!(effects.is_empty());
    assert!(!runner.tick_pending());
    assert_eq!(app.timer.time_left, MINUTE * 25);

    // resuming arms exactly one tick
    tx.send(key(' ')).unwrap();
    let event = runner.step().unwrap();
    let (app, effects) = app::update(app, event);
    assert!(!app.timer.paused);
    assert_eq!(effects, vec![Effect::ScheduleTick]);
}
