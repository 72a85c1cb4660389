//! # dotlink
//!
//! Rule engine for a dot-connecting puzzle.
//!
//! The board is a grid of colored dots. A move is a path of same-colored,
//! 4-adjacent dots. The path's dots are cleared, each column collapses
//! downward, and new dots fall in from the top. A path that revisits a dot
//! closes a loop and clears every dot of that color on the board for double
//! points.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: A `BoardEngine` value owns its grid, score, move
//!    budget, and color sampler. No globals.
//!
//! 2. **Injected Randomness**: New dots come from a `ColorSampler`. Seed a
//!    `GameRng` for reproducible games, or script the colors in tests.
//!
//! 3. **All-or-Nothing Moves**: A move is rejected before any mutation or
//!    applied in full.
//!
//! ## Modules
//!
//! - `core`: Cells, colors, sampling, grid storage, paths, configuration
//! - `rules`: `BoardEngine` and scoring
//!
//! ## Example
//!
//! ```
//! use dotlink::{BoardConfig, BoardEngine, Cell, PathBuilder};
//!
//! let mut engine = BoardEngine::seeded(&BoardConfig::default(), 7).unwrap();
//!
//! // Find any two matching neighbors and play them.
//! let snapshot = engine.grid_snapshot();
//! let pair = (0..engine.rows())
//!     .flat_map(|r| (0..engine.cols()).map(move |c| Cell::new(r, c)))
//!     .find_map(|cell| {
//!         let mut builder = PathBuilder::start(&snapshot, cell)?;
//!         let right = Cell::new(cell.row, cell.col + 1);
//!         let down = Cell::new(cell.row + 1, cell.col);
//!         builder.push(right);
//!         if builder.len() < 2 {
//!             builder.push(down);
//!         }
//!         (builder.len() == 2).then(|| builder.into_path())
//!     });
//!
//! if let Some(path) = pair {
//!     let outcome = engine.process_move(&path).unwrap();
//!     assert_eq!(engine.score(), outcome.score_delta);
//!     assert_eq!(engine.moves_left(), 29);
//! }
//! ```

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, Cell, Color, ColorSampler, ConfigError, GameRng, Grid, GridSnapshot, LevelConfig,
    MoveError, Palette, PathBuilder, PathError, PathStep, ScoringConfig, ScriptedSampler,
};

pub use crate::rules::{BoardEngine, GameStatus, MoveOutcome};
