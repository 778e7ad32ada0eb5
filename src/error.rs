use std::io;
use thiserror::Error;

/// Errors surfaced by grid construction, configuration and the terminal.
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("grid dimensions must be positive (got {columns}x{rows})")]
    InvalidDimensions { columns: usize, rows: usize },

    #[error("cell size must be at least 1")]
    InvalidCellSize,

    #[error("frame rate must be at least 1 fps (got {0})")]
    InvalidFrameRate(u32),

    #[error("density must be between 0.0 and 1.0 (got {0})")]
    InvalidDensity(f64),

    #[error("unknown pattern '{0}' (try `termlife patterns`)")]
    UnknownPattern(String),

    #[error("engine is idle: initialize liveness before ticking")]
    NotRunning,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
