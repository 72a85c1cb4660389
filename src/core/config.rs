//! Board configuration.
//!
//! - `ScoringConfig`: points per dot and the loop multiplier
//! - `BoardConfig`: dimensions, palette, move budget, optional target
//! - `LevelConfig`: the built-in level table
//!
//! Configs load from TOML and are validated after parsing:
//!
//! ```
//! use dotlink::core::BoardConfig;
//!
//! let config = BoardConfig::from_toml_str(r#"
//!     rows = 4
//!     cols = 5
//!     moves = 12
//!     palette = ["red", "blue", "green"]
//!     target_score = 40
//! "#).unwrap();
//!
//! assert_eq!(config.rows, 4);
//! assert_eq!(config.palette.len(), 3);
//! assert_eq!(config.scoring.loop_multiplier, 2);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::color::Palette;
use super::error::ConfigError;

/// Score rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points for each cleared dot.
    pub points_per_dot: u64,
    /// Multiplier applied when the path closes a loop.
    pub loop_multiplier: u64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            points_per_dot: 1,
            loop_multiplier: 2,
        }
    }
}

impl ScoringConfig {
    /// Scoring of the level-based game: 10 per dot, doubled for loops.
    #[must_use]
    pub const fn arcade() -> Self {
        Self {
            points_per_dot: 10,
            loop_multiplier: 2,
        }
    }
}

/// Everything needed to start a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub palette: Palette,
    /// Move budget.
    pub moves: u32,
    /// Score that wins the board. `None` for endless play.
    pub target_score: Option<u64>,
    /// Level number, informational.
    pub level: u32,
    pub scoring: ScoringConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 6,
            palette: Palette::default(),
            moves: 30,
            target_score: None,
            level: 1,
            scoring: ScoringConfig::default(),
        }
    }
}

impl BoardConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set board dimensions.
    #[must_use]
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the move budget.
    #[must_use]
    pub fn with_moves(mut self, moves: u32) -> Self {
        self.moves = moves;
        self
    }

    /// Set a winning score.
    #[must_use]
    pub fn with_target_score(mut self, target: u64) -> Self {
        self.target_score = Some(target);
        self
    }

    /// Set scoring rules.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.scoring.points_per_dot == 0 {
            return Err(ConfigError::Validation("scoring.points_per_dot must be > 0".into()));
        }
        if self.scoring.loop_multiplier == 0 {
            return Err(ConfigError::Validation("scoring.loop_multiplier must be > 0".into()));
        }
        Ok(())
    }
}

/// Number of built-in levels.
pub const LEVEL_COUNT: u32 = 50;

/// One entry of the built-in level table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub id: u32,
    pub moves: u32,
    pub target_score: u64,
    /// Number of colors, drawn from the front of the standard palette.
    pub colors: usize,
    /// Square board side.
    pub grid_size: usize,
}

impl LevelConfig {
    /// Level `id`, or `None` outside `1..=LEVEL_COUNT`.
    #[must_use]
    pub fn get(id: u32) -> Option<Self> {
        if !(1..=LEVEL_COUNT).contains(&id) {
            return None;
        }
        let colors = match id {
            1..=4 => 3,
            5..=14 => 4,
            15..=29 => 5,
            _ => 6,
        };
        Some(Self {
            id,
            moves: 35u32.saturating_sub(id).max(15),
            target_score: 500 + u64::from(id) * 200,
            colors,
            grid_size: if id < 20 { 6 } else { 7 },
        })
    }

    /// The level after this one, or `None` after the last level.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        Self::get(self.id + 1)
    }

    /// Board configuration for this level.
    #[must_use]
    pub fn board_config(&self) -> BoardConfig {
        BoardConfig {
            rows: self.grid_size,
            cols: self.grid_size,
            palette: Palette::standard(self.colors),
            moves: self.moves,
            target_score: Some(self.target_score),
            level: self.id,
            scoring: ScoringConfig::arcade(),
        }
    }
}

/// All built-in levels in order.
pub fn levels() -> impl Iterator<Item = LevelConfig> {
    (1..=LEVEL_COUNT).filter_map(LevelConfig::get)
}
