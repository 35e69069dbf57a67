use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "TOMAT_LOG";
/// Targets the app logs under: `runtime`, `timer`, `input`, `notify`
const DEFAULT_FILTER: &str = "runtime=info,timer=info,input=info,notify=info";

/// Install a file-backed tracing subscriber appending to `path`.
///
/// Returns the writer guard, which must be held until shutdown so buffered
/// lines are flushed. Returns `None` when logging could not be set up; the
/// caller carries on without logs.
pub fn init_file_logging(path: &Path) -> Option<WorkerGuard> {
    let dir = path.parent()?;
    let file_name = path.file_name()?;
    fs::create_dir_all(dir).ok()?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .ok()?;

    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    // Only one test may install the global subscriber
    #[test]
    fn default_filter_writes_app_events() {
        std::env::remove_var(LOG_ENV);
        let dir = tempdir().unwrap();
        let path = dir.path().join("state").join("test.log");
        let guard = init_file_logging(&path);
        assert!(guard.is_some());

        tracing::info!(target: "runtime", "starting");
        tracing::debug!(target: "timer", "session_transition");
        tracing::info!(target: "runtime", "quit");
        drop(guard);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("starting"));
        assert!(contents.contains("quit"));
        assert!(!contents.contains("session_transition"));
    }
}
