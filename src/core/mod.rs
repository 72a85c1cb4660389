//! Core board types: cells, colors, sampling, grid storage, paths, configuration.
//!
//! Everything here is rule-agnostic storage and data. The move rules live in
//! `rules`.

pub mod cell;
pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod path;
pub mod rng;
pub mod snapshot;

pub use cell::Cell;
pub use color::{Color, Palette, STANDARD_COLORS};
pub use config::{levels, BoardConfig, LevelConfig, ScoringConfig, LEVEL_COUNT};
pub use error::{ConfigError, MoveError, PathError};
pub use grid::{ColumnRefill, Grid};
pub use path::{detect_loop, ColorLookup, Path, PathBuilder, PathStep};
pub use rng::{ColorSampler, GameRng, ScriptedSampler};
pub use snapshot::{GridSnapshot, SnapshotDisplay};
