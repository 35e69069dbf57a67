use anyhow::Context;
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdin, Stdout};
use tracing::info;

use tomat::{
    app::App,
    app_dirs::AppDirs,
    config::{Config, DEFAULT_BREAK_MINS, DEFAULT_LONG_BREAK_MINS, DEFAULT_STUDY_MINS},
    error::AppError,
    event_loop::run_app,
    logging,
    notifier::DesktopNotifier,
    runtime::{CrosstermEventSource, FixedTicker, Runner},
    timer::TICK,
};

/// sleek pomodoro tui with a giant countdown
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A pomodoro focus timer for the terminal. Cycles between study sessions and short breaks, with a long break after every fourth study session. Durations can be edited live from the help overlay."
)]
pub struct Cli {
    /// minutes per study session
    #[clap(long = "study", default_value_t = DEFAULT_STUDY_MINS, value_parser = clap::value_parser!(u64).range(1..))]
    study_mins: u64,

    /// minutes per short break
    #[clap(long = "break", default_value_t = DEFAULT_BREAK_MINS, value_parser = clap::value_parser!(u64).range(1..))]
    break_mins: u64,

    /// minutes per long break
    #[clap(long = "lbreak", default_value_t = DEFAULT_LONG_BREAK_MINS, value_parser = clap::value_parser!(u64).range(1..))]
    long_break_mins: u64,
}

impl Cli {
    fn to_config(&self) -> Config {
        Config::from_minutes(self.study_mins, self.break_mins, self.long_break_mins)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, AppError::NotATty).exit();
    }

    let _log_guard = AppDirs::log_path().and_then(|path| logging::init_file_logging(&path));
    info!(
        target: "runtime",
        study = cli.study_mins,
        short_break = cli.break_mins,
        long_break = cli.long_break_mins,
        "starting"
    );

    let mut terminal = setup_terminal().context("failed to start the terminal UI")?;
    let result = start_tui(&mut terminal, cli.to_config());
    let restored = restore_terminal(&mut terminal);

    result.context("terminal UI failed")?;
    restored.context("failed to restore the terminal")?;
    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    undo_on_err(execute!(stdout, EnterAlternateScreen), || {
        let _ = disable_raw_mode();
    })?;
    undo_on_err(Terminal::new(CrosstermBackend::new(stdout)), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })
}

/// Run `undo` when `result` is an error, then hand the result back
fn undo_on_err<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, config: Config) -> Result<App, AppError> {
    let mut runner = Runner::new(CrosstermEventSource::new(), FixedTicker::new(TICK));
    let notifier = DesktopNotifier::default();
    run_app(terminal, &mut runner, &notifier, config)
}
