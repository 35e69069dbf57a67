use ratatui::{backend::Backend, Terminal};
use tracing::info;

use crate::{
    app::{self, App, Effect},
    config::Config,
    error::AppError,
    notifier::Notifier,
    runtime::{EventSource, Runner, Ticker},
};

/// Drive the app until the user quits: one event at a time, reduce, run the
/// requested effects, redraw. Returns the final snapshot.
pub fn run_app<B, E, T, N>(
    terminal: &mut Terminal<B>,
    runner: &mut Runner<E, T>,
    notifier: &N,
    config: Config,
) -> Result<App, AppError>
where
    B: Backend,
    E: EventSource,
    T: Ticker,
    N: Notifier,
{
    let (mut app, effects) = app::init(config);
    let mut quit = run_effects(effects, runner, notifier);
    terminal.draw(|f| f.render_widget(&app, f.area()))?;

    while !quit {
        let event = runner.step()?;
        let (next, effects) = app::update(app, event);
        app = next;
        quit = run_effects(effects, runner, notifier);
        terminal.draw(|f| f.render_widget(&app, f.area()))?;
    }

    info!(
        target: "runtime",
        completed = app.stats.study_sessions_completed,
        total_secs = app.stats.total_study_time.as_secs(),
        "quit"
    );
    Ok(app)
}

fn run_effects<E, T, N>(effects: Vec<Effect>, runner: &mut Runner<E, T>, notifier: &N) -> bool
where
    E: EventSource,
    T: Ticker,
    N: Notifier,
{
    let mut quit = false;
    for effect in effects {
        match effect {
            Effect::ScheduleTick => runner.schedule_tick(),
            Effect::Notify(notification) => notifier.notify(&notification),
            Effect::Quit => quit = true,
        }
    }
    quit
}
