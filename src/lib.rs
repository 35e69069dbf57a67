// Library surface for headless/integration tests and reuse.
// The binary in main.rs only adds CLI parsing and terminal setup.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod event_loop;
pub mod input;
pub mod logging;
pub mod notifier;
pub mod runtime;
pub mod session;
pub mod stats;
pub mod timer;
pub mod ui;
