//! Player paths.
//!
//! A path is the ordered list of cells the player dragged across. It may
//! revisit a cell once to close a loop.
//!
//! ## Loop Semantics
//!
//! Any repeated cell counts as a loop. There is no check that the repeat
//! closes a geometric cycle.
//!
//! ## Drawing
//!
//! `PathBuilder` applies the same rules a touch front end applies while
//! the player drags:
//!
//! ```
//! use dotlink::core::{Cell, Color, Grid, PathBuilder, PathStep};
//!
//! let r = Color(0);
//! let grid = Grid::from_rows(vec![vec![r, r], vec![r, r]]).unwrap();
//!
//! let mut builder = PathBuilder::start(&grid, Cell::new(0, 0)).unwrap();
//! assert_eq!(builder.push(Cell::new(0, 1)), PathStep::Extended);
//! assert_eq!(builder.push(Cell::new(0, 0)), PathStep::Backtracked);
//! assert_eq!(builder.push(Cell::new(1, 0)), PathStep::Extended);
//! assert_eq!(builder.push(Cell::new(1, 1)), PathStep::Extended);
//! assert_eq!(builder.push(Cell::new(0, 1)), PathStep::Extended);
//! assert_eq!(builder.push(Cell::new(0, 0)), PathStep::ClosedLoop);
//! assert!(builder.is_loop());
//! ```

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::cell::Cell;
use super::color::Color;
use super::grid::Grid;
use super::snapshot::GridSnapshot;

/// Ordered cells of a drawn path.
///
/// SmallVec keeps typical paths (under 16 dots) off the heap.
pub type Path = SmallVec<[Cell; 16]>;

/// Anything that can report the color at a cell.
pub trait ColorLookup {
    /// Color at `cell`, or `None` when out of bounds or empty.
    fn color_at(&self, cell: Cell) -> Option<Color>;
}

impl ColorLookup for Grid {
    fn color_at(&self, cell: Cell) -> Option<Color> {
        self.get(cell)
    }
}

impl ColorLookup for GridSnapshot {
    fn color_at(&self, cell: Cell) -> Option<Color> {
        self.get(cell)
    }
}

/// Check whether any cell appears more than once.
#[must_use]
pub fn detect_loop(path: &[Cell]) -> bool {
    let mut seen = FxHashSet::default();
    path.iter().any(|cell| !seen.insert(*cell))
}

/// Distinct cells of a path.
#[must_use]
pub fn distinct_cells(path: &[Cell]) -> FxHashSet<Cell> {
    path.iter().copied().collect()
}

/// Result of pushing a cell onto a `PathBuilder`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathStep {
    /// Cell appended.
    Extended,
    /// Cell was already in the path; appended and the path is now a loop.
    ClosedLoop,
    /// Cell was the second-to-last entry; the last entry was removed.
    Backtracked,
    /// Cell equals the current end of the path.
    Ignored,
    /// Cell is out of bounds, not adjacent, or a different color.
    Rejected,
}

/// Incremental path construction against a board.
pub struct PathBuilder<'a, B: ColorLookup + ?Sized> {
    board: &'a B,
    color: Color,
    cells: Path,
}

impl<'a, B: ColorLookup + ?Sized> PathBuilder<'a, B> {
    /// Begin a path at `cell`. Returns `None` if the cell has no color.
    #[must_use]
    pub fn start(board: &'a B, cell: Cell) -> Option<Self> {
        let color = board.color_at(cell)?;
        let mut cells = Path::new();
        cells.push(cell);
        Some(Self { board, color, cells })
    }

    /// Drag onto `cell`.
    pub fn push(&mut self, cell: Cell) -> PathStep {
        let Some(&last) = self.cells.last() else {
            return PathStep::Rejected;
        };
        if cell == last {
            return PathStep::Ignored;
        }
        if self.board.color_at(cell) != Some(self.color) || !last.is_adjacent(cell) {
            return PathStep::Rejected;
        }
        if self.cells.len() > 1 && self.cells[self.cells.len() - 2] == cell {
            self.cells.pop();
            return PathStep::Backtracked;
        }
        let revisit = self.cells.contains(&cell);
        self.cells.push(cell);
        if revisit {
            PathStep::ClosedLoop
        } else {
            PathStep::Extended
        }
    }

    /// Color of the path.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Check whether the path currently contains a repeat.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        detect_loop(&self.cells)
    }

    /// Cells so far.
    #[must_use]
    pub fn path(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a builder starts with one cell and never pops it.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Finish drawing.
    #[must_use]
    pub fn into_path(self) -> Path {
        self.cells
    }
}
