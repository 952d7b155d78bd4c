use std::io;

use thiserror::Error;

use crate::GridInt;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid size must be between {min} and {max}, got {got}")]
    GridSize { got: GridInt, min: GridInt, max: GridInt },

    #[error("tick interval must be between {min}ms and {max}ms, got {got}ms")]
    TickInterval { got: u64, min: u64, max: u64 },
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("terminal is {have_w}x{have_h}, the board needs at least {need_w}x{need_h}")]
    TerminalTooSmall { have_w: u16, have_h: u16, need_w: u16, need_h: u16 },

    #[error("failed to open log file '{path}': {source}")]
    LogFile {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
