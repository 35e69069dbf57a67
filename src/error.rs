use std::io;

use thiserror::Error;

/// Fatal failures of the terminal driver
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("stdin must be a tty")]
    NotATty,

    #[error("terminal input stream closed")]
    EventSourceClosed,
}
