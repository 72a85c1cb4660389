//! Error types.
//!
//! All errors are recoverable by the caller. A rejected move never mutates
//! the engine.

use std::path::PathBuf;

use super::cell::Cell;

/// Invalid construction or configuration parameters.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("board must have at least one row and one column (got {rows}x{cols})")]
    EmptyBoard { rows: usize, cols: usize },

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("palette has {0} colors, at most 255 are supported")]
    PaletteTooLarge(usize),

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}

/// Why a path was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("path has {0} cell(s), at least 2 are required")]
    TooShort(usize),

    #[error("cell {0} is outside the board")]
    OutOfBounds(Cell),

    #[error("cells {0} and {1} are not adjacent")]
    NotAdjacent(Cell, Cell),

    #[error("cell {0} does not match the path color")]
    ColorMismatch(Cell),
}

/// A move was rejected. The engine state is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no moves left")]
    NoMovesLeft,

    #[error("invalid path: {0}")]
    InvalidPath(#[from] PathError),
}
