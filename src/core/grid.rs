//! Grid storage and gravity.
//!
//! The grid is stored row-major. Row 0 is the top. A cell holds
//! `Some(color)` or `None`; `None` only exists between clearing a move's
//! cells and the refill that follows.
//!
//! ## Gravity
//!
//! Each column is compacted independently:
//!
//! 1. Collect the surviving colors top-to-bottom.
//! 2. Write them back so the lowest survivor lands on the bottom row,
//!    keeping their order.
//! 3. Fill the rows above, bottom-up, with freshly sampled colors.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::Cell;
use super::color::{Color, Palette};
use super::error::ConfigError;
use super::rng::ColorSampler;
use super::snapshot::GridSnapshot;

/// Refill report for one column that lost dots during a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRefill {
    /// Column index.
    pub col: usize,
    /// Number of surviving dots that were compacted to the bottom.
    pub shifted: usize,
    /// New colors, top-to-bottom, occupying rows `0..new_colors.len()`.
    pub new_colors: Vec<Color>,
}

/// Board storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Color>>,
}

impl Grid {
    /// Create a grid with every cell sampled independently.
    pub fn generate(
        rows: usize,
        cols: usize,
        palette: &Palette,
        sampler: &mut impl ColorSampler,
    ) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyBoard { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or_else(|| ConfigError::Validation(format!("board {rows}x{cols} is too large")))?;
        let cells = (0..len).map(|_| Some(sampler.sample(palette))).collect();
        Ok(Self { rows, cols, cells })
    }

    /// Create a grid from explicit rows of colors.
    ///
    /// Fails if there are no rows, the first row is empty, or rows differ
    /// in length.
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(ConfigError::EmptyBoard { rows: height, cols: width });
        }
        if rows.iter().any(|r| r.len() != width) {
            return Err(ConfigError::Validation("grid rows must all have the same length".into()));
        }
        let cells = rows.into_iter().flatten().map(Some).collect();
        Ok(Self { rows: height, cols: width, cells })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check whether a cell is on the board.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.in_bounds(self.rows, self.cols)
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }

    /// Color at `cell`. `None` if out of bounds or empty.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Color> {
        if self.contains(cell) {
            self.cells[self.index(cell)]
        } else {
            None
        }
    }

    /// Empty a cell. Out-of-bounds cells are ignored.
    pub fn clear(&mut self, cell: Cell) {
        if self.contains(cell) {
            let idx = self.index(cell);
            self.cells[idx] = None;
        }
    }

    /// Check that no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// All cells currently holding `color`, row-major.
    pub fn cells_with(&self, color: Color) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == Some(color))
            .map(move |(i, _)| Cell::new(i / cols, i % cols))
    }

    /// Compact every column and refill vacated cells.
    ///
    /// Returns a report for each column that had at least one empty cell.
    pub fn apply_gravity(
        &mut self,
        palette: &Palette,
        sampler: &mut impl ColorSampler,
    ) -> Vec<ColumnRefill> {
        let mut refills = Vec::new();
        for col in 0..self.cols {
            if let Some(refill) = self.settle_column(col, palette, sampler) {
                log::trace!("column {} refilled with {} new dot(s)", col, refill.new_colors.len());
                refills.push(refill);
            }
        }
        refills
    }

    fn settle_column(
        &mut self,
        col: usize,
        palette: &Palette,
        sampler: &mut impl ColorSampler,
    ) -> Option<ColumnRefill> {
        let mut survivors: SmallVec<[Color; 16]> = (0..self.rows)
            .filter_map(|row| self.cells[row * self.cols + col])
            .collect();

        let missing = self.rows - survivors.len();
        if missing == 0 {
            return None;
        }
        let shifted = survivors.len();

        let mut new_colors = vec![Color(0); missing];
        for row in (0..self.rows).rev() {
            let color = match survivors.pop() {
                Some(color) => color,
                None => {
                    let fresh = sampler.sample(palette);
                    new_colors[row] = fresh;
                    fresh
                }
            };
            self.cells[row * self.cols + col] = Some(color);
        }

        Some(ColumnRefill { col, shifted, new_colors })
    }

    /// Read-only copy of the current colors.
    #[must_use]
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::new(self.rows, self.cols, self.cells.clone())
    }

    /// Colors of one column, top-to-bottom.
    #[must_use]
    pub fn column(&self, col: usize) -> Vec<Option<Color>> {
        (0..self.rows).map(|row| self.get(Cell::new(row, col))).collect()
    }
}
