use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};
use tracing::warn;

use crate::error::AppError;

/// How long to block for input when no tick is pending
const IDLE_WAIT: Duration = Duration::from_secs(60);

/// Unified event type consumed by the app reducer
#[derive(Clone, Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait EventSource: Send + 'static {
    /// Block for up to `timeout` waiting for an event.
    /// Returns Ok(event) if an event arrives before the timeout, or Err(Timeout) if it expires.
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError>;
}

/// Map a raw terminal event onto what the app reacts to.
/// Key releases (reported on Windows) and mouse/focus/paste events are dropped.
pub fn translate(event: CtEvent) -> Option<AppEvent> {
    match event {
        CtEvent::Key(key) if key.kind != KeyEventKind::Release => Some(AppEvent::Key(key)),
        CtEvent::Resize(_, _) => Some(AppEvent::Resize),
        _ => None,
    }
}

/// Input read from the real terminal on a dedicated thread
pub struct CrosstermEventSource {
    rx: Receiver<AppEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let event = match event::read() {
                Ok(event) => event,
                Err(err) => {
                    warn!(target: "runtime", %err, "terminal_read_failed");
                    break;
                }
            };
            // a closed receiver means the event loop has returned
            if let Some(ev) = translate(event) {
                if tx.send(ev).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Configurable ticker interface
pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

/// Fixed interval ticker
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Test event source for unit tests
pub struct TestEventSource {
    rx: Receiver<AppEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<AppEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Runner that hands out one event at a time.
///
/// Ticks are not free-running: at most one is pending, armed by
/// [`Runner::schedule_tick`]. Arming again replaces the pending deadline.
pub struct Runner<E: EventSource, T: Ticker> {
    event_source: E,
    ticker: T,
    next_tick: Option<Instant>,
}

impl<E: EventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
            next_tick: None,
        }
    }

    pub fn schedule_tick(&mut self) {
        self.next_tick = Some(Instant::now() + self.ticker.interval());
    }

    pub fn tick_pending(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Blocks until the next input event, or returns Tick once the pending deadline passes
    pub fn step(&mut self) -> Result<AppEvent, AppError> {
        loop {
            let timeout = match self.next_tick {
                Some(deadline) => deadline.saturating_duration_since(Instant::now()),
                None => IDLE_WAIT,
            };
            match self.event_source.recv_timeout(timeout) {
                Ok(ev) => return Ok(ev),
                Err(RecvTimeoutError::Timeout) => {
                    if self.next_tick.take().is_some() {
                        return Ok(AppEvent::Tick);
                    }
                }
                Err(RecvTimeoutError::Disconnected) => return Err(AppError::EventSourceClosed),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn step_returns_tick_once_scheduled_deadline_passes() {
        let (_tx, rx) = mpsc::channel();
        let es = TestEventSource::new(rx);
        let ticker = FixedTicker::new(Duration::from_millis(1));
        let mut runner = Runner::new(es, ticker);

        runner.schedule_tick();
        assert!(runner.tick_pending());
        match runner.step() {
            Ok(AppEvent::Tick) => {}
            other => panic!("expected Tick on timeout, got {other:?}"),
        }
        assert!(!runner.tick_pending());
    }

    #[test]
    fn step_passes_through_events() {
        let (tx, rx) = mpsc::channel();
        tx.send(AppEvent::Resize).unwrap();
        let es = TestEventSource::new(rx);
        let ticker = FixedTicker::new(Duration::from_millis(10));
        let mut runner = Runner::new(es, ticker);
        runner.schedule_tick();

        match runner.step() {
            Ok(AppEvent::Resize) => {}
            other => panic!("expected Resize event, got {other:?}"),
        }
        // the pending tick survives the interleaved event
        assert!(runner.tick_pending());
    }

    #[test]
    fn rescheduling_keeps_a_single_pending_tick() {
        let (tx, rx) = mpsc::channel();
        let es = TestEventSource::new(rx);
        let ticker = FixedTicker::new(Duration::from_millis(1));
        let mut runner = Runner::new(es, ticker);

        runner.schedule_tick();
        runner.schedule_tick();
        runner.schedule_tick();
        assert!(matches!(runner.step(), Ok(AppEvent::Tick)));

        // nothing armed now: the next step waits for input instead of ticking
        tx.send(AppEvent::Resize).unwrap();
        assert!(matches!(runner.step(), Ok(AppEvent::Resize)));
    }

    #[test]
    fn translate_keeps_presses_and_resizes_only() {
        use crossterm::event::{KeyCode, KeyModifiers, MouseEvent, MouseEventKind};

        let press = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE);
        assert!(matches!(translate(CtEvent::Key(press)), Some(AppEvent::Key(k)) if k == press));

        let mut release = press;
        release.kind = KeyEventKind::Release;
        assert!(translate(CtEvent::Key(release)).is_none());

        assert!(matches!(translate(CtEvent::Resize(80, 24)), Some(AppEvent::Resize)));
        assert!(translate(CtEvent::FocusGained).is_none());

        let mouse = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert!(translate(CtEvent::Mouse(mouse)).is_none());
    }

    #[test]
    fn step_reports_closed_source() {
        let (tx, rx) = mpsc::channel::<AppEvent>();
        drop(tx);
        let es = TestEventSource::new(rx);
        let mut runner = Runner::new(es, FixedTicker::new(Duration::from_millis(1)));
        assert!(matches!(runner.step(), Err(AppError::EventSourceClosed)));
    }
}
