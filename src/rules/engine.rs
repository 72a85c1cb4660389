//! The board engine.
//!
//! `BoardEngine` owns the grid, the score, the move budget, and the color
//! sampler. A move is applied in one call:
//!
//! 1. Reject if no moves are left.
//! 2. Reject if the path is invalid.
//! 3. Clear the path's distinct cells. If the path repeats a cell, also
//!    clear every dot of the path's color anywhere on the board.
//! 4. Add the score increment.
//! 5. Apply gravity and refill.
//! 6. Spend one move.
//!
//! Rejections happen before any mutation.
//!
//! ## Example
//!
//! ```
//! use dotlink::core::{Cell, Color, Palette, ScriptedSampler};
//! use dotlink::rules::BoardEngine;
//!
//! let palette = Palette::new(["red"]).unwrap();
//! let sampler = ScriptedSampler::constant(Color(0));
//! let mut engine = BoardEngine::new(3, 3, palette, 1, sampler).unwrap();
//!
//! let path = [Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)];
//! let outcome = engine.process_move(&path).unwrap();
//!
//! assert_eq!(outcome.cleared.len(), 3);
//! assert_eq!(engine.score(), 3);
//! assert_eq!(engine.moves_left(), 0);
//! assert!(engine.is_terminal());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::scoring::score_increment;
use crate::core::path::{detect_loop, distinct_cells, ColorLookup};
use crate::core::{
    BoardConfig, Cell, Color, ColorSampler, ColumnRefill, ConfigError, GameRng, Grid, GridSnapshot,
    MoveError, Palette, PathError, ScoringConfig,
};

/// Result of an accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Color of the path.
    pub color: Color,
    /// Every cleared cell, sorted row-major.
    pub cleared: Vec<Cell>,
    /// Points added by this move.
    pub score_delta: u64,
    /// Whether the path closed a loop.
    pub is_loop: bool,
    /// Columns that were compacted and refilled.
    pub refills: Vec<ColumnRefill>,
}

/// Progress toward the board's goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves remain and the target (if any) is not reached.
    InProgress,
    /// Score reached the target.
    Won,
    /// Out of moves without reaching the target.
    Lost,
}

/// Grid state machine for one game session.
///
/// Generic over the color source so tests can inject a scripted sampler.
/// Each session owns its own engine; nothing is shared.
#[derive(Clone, Debug)]
pub struct BoardEngine<S: ColorSampler = GameRng> {
    grid: Grid,
    palette: Palette,
    scoring: ScoringConfig,
    score: u64,
    moves_left: u32,
    moves_made: u32,
    target_score: Option<u64>,
    level: u32,
    sampler: S,
}

impl<S: ColorSampler> BoardEngine<S> {
    /// Create a board with every cell sampled from `palette`.
    ///
    /// Fails with `ConfigError` if `rows` or `cols` is zero.
    pub fn new(
        rows: usize,
        cols: usize,
        palette: Palette,
        moves_left: u32,
        sampler: S,
    ) -> Result<Self, ConfigError> {
        let config = BoardConfig::new()
            .with_size(rows, cols)
            .with_palette(palette)
            .with_moves(moves_left);
        Self::from_config(&config, sampler)
    }

    /// Create a board from a configuration.
    pub fn from_config(config: &BoardConfig, mut sampler: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::generate(config.rows, config.cols, &config.palette, &mut sampler)?;
        log::debug!(
            "new {}x{} board, {} colors, {} moves",
            config.rows,
            config.cols,
            config.palette.len(),
            config.moves
        );
        Ok(Self {
            grid,
            palette: config.palette.clone(),
            scoring: config.scoring,
            score: 0,
            moves_left: config.moves,
            moves_made: 0,
            target_score: config.target_score,
            level: config.level,
            sampler,
        })
    }

    /// Create an engine around an existing grid.
    ///
    /// Every grid color must belong to `palette`.
    pub fn with_grid(grid: Grid, palette: Palette, moves_left: u32, sampler: S) -> Result<Self, ConfigError> {
        let snapshot = grid.snapshot();
        let foreign = snapshot
            .iter_rows()
            .flatten()
            .flatten()
            .find(|color| !palette.contains(**color));
        if let Some(color) = foreign {
            return Err(ConfigError::Validation(format!(
                "grid color {} is not in the {}-color palette",
                color.0,
                palette.len()
            )));
        }
        Ok(Self {
            grid,
            palette,
            scoring: ScoringConfig::default(),
            score: 0,
            moves_left,
            moves_made: 0,
            target_score: None,
            level: 1,
            sampler,
        })
    }

    // === Queries ===

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// The board palette.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Scoring rules in effect.
    #[must_use]
    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Moves remaining.
    #[must_use]
    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    /// Moves accepted so far.
    #[must_use]
    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    /// Winning score, if any.
    #[must_use]
    pub fn target_score(&self) -> Option<u64> {
        self.target_score
    }

    /// Level number.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Color at `cell`. `None` when out of bounds.
    #[must_use]
    pub fn color_at(&self, cell: Cell) -> Option<Color> {
        self.grid.get(cell)
    }

    /// Read-only copy of the board.
    #[must_use]
    pub fn grid_snapshot(&self) -> GridSnapshot {
        self.grid.snapshot()
    }

    /// The color sampler.
    #[must_use]
    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// No further moves are accepted.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.moves_left == 0
    }

    /// Win/loss state. Reaching the target wins even on the last move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.target_score.is_some_and(|target| self.score >= target) {
            GameStatus::Won
        } else if self.is_terminal() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    // === Path Rules ===

    /// 4-directional adjacency.
    #[must_use]
    pub fn is_adjacent(&self, a: Cell, b: Cell) -> bool {
        a.is_adjacent(b)
    }

    /// Check a path and return its color, or the first rule it breaks.
    ///
    /// Rules apply between consecutive entries only: each step must be
    /// adjacent and land on the starting color. A path may cross itself.
    pub fn check_path(&self, path: &[Cell]) -> Result<Color, PathError> {
        if path.len() < 2 {
            return Err(PathError::TooShort(path.len()));
        }
        if let Some(&outside) = path.iter().find(|cell| !self.grid.contains(**cell)) {
            return Err(PathError::OutOfBounds(outside));
        }
        let color = self.grid.get(path[0]).ok_or(PathError::OutOfBounds(path[0]))?;
        for pair in path.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if !from.is_adjacent(to) {
                return Err(PathError::NotAdjacent(from, to));
            }
            if self.grid.get(to) != Some(color) {
                return Err(PathError::ColorMismatch(to));
            }
        }
        Ok(color)
    }

    /// Check whether a path is a legal move shape.
    #[must_use]
    pub fn validate_path(&self, path: &[Cell]) -> bool {
        self.check_path(path).is_ok()
    }

    /// Check whether the path repeats any cell.
    #[must_use]
    pub fn detect_loop(&self, path: &[Cell]) -> bool {
        detect_loop(path)
    }

    // === Moves ===

    /// Apply a move.
    ///
    /// On error the engine is unchanged.
    pub fn process_move(&mut self, path: &[Cell]) -> Result<MoveOutcome, MoveError> {
        if self.moves_left == 0 {
            return Err(MoveError::NoMovesLeft);
        }
        let color = self.check_path(path)?;

        let is_loop = detect_loop(path);
        let mut cleared = distinct_cells(path);
        if is_loop {
            cleared.extend(self.grid.cells_with(color));
            log::debug!("loop closed: flooding {} dot(s) of color {}", cleared.len(), color.0);
        }

        let score_delta = score_increment(&self.scoring, cleared.len(), is_loop);
        self.score = self.score.saturating_add(score_delta);

        for cell in &cleared {
            self.grid.clear(*cell);
        }
        let refills = self.grid.apply_gravity(&self.palette, &mut self.sampler);
        debug_assert!(self.grid.is_full());

        self.moves_left -= 1;
        self.moves_made += 1;

        let mut cleared: Vec<Cell> = cleared.into_iter().collect();
        cleared.sort_unstable();

        log::debug!(
            "move {}: cleared {} {} dot(s), +{} (score {}, {} moves left)",
            self.moves_made,
            cleared.len(),
            self.palette.name(color),
            score_delta,
            self.score,
            self.moves_left
        );

        Ok(MoveOutcome {
            color,
            cleared,
            score_delta,
            is_loop,
            refills,
        })
    }
}

impl BoardEngine<GameRng> {
    /// Create a board driven by a seeded `GameRng`.
    pub fn seeded(config: &BoardConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::from_config(config, GameRng::new(seed))
    }
}

impl<S: ColorSampler> ColorLookup for BoardEngine<S> {
    fn color_at(&self, cell: Cell) -> Option<Color> {
        self.grid.get(cell)
    }
}

impl<S: ColorSampler> fmt::Display for BoardEngine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score: {} | Moves: {}", self.score, self.moves_left)?;
        if let Some(target) = self.target_score {
            write!(f, " | Target: {target}")?;
        }
        writeln!(f)?;
        write!(f, "{}", self.grid.snapshot().display(&self.palette))
    }
}
