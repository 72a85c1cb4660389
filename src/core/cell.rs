//! Board coordinates.
//!
//! A `Cell` is a `(row, col)` position. Row 0 is the top of the board,
//! so gravity pulls toward larger row indices.
//!
//! ```
//! use dotlink::core::Cell;
//!
//! let a = Cell::new(1, 1);
//! assert!(a.is_adjacent(Cell::new(0, 1)));
//! assert!(a.is_adjacent(Cell::new(1, 2)));
//! assert!(!a.is_adjacent(Cell::new(2, 2))); // diagonal
//! assert!(!a.is_adjacent(a));
//! ```

use serde::{Deserialize, Serialize};

/// A position on the board.
///
/// Coordinates are unsigned; a cell is in bounds for a `rows × cols` board
/// when `row < rows && col < cols`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check 4-directional adjacency.
    ///
    /// True iff the cells differ by exactly 1 in exactly one coordinate.
    /// No diagonals, no wraparound.
    #[must_use]
    pub const fn is_adjacent(self, other: Cell) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        (dr == 1 && dc == 0) || (dr == 0 && dc == 1)
    }

    /// Check whether this cell lies inside a `rows × cols` board.
    #[must_use]
    pub const fn in_bounds(self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orthogonal_neighbors_are_adjacent() {
        let c = Cell::new(2, 2);
        assert!(c.is_adjacent(Cell::new(1, 2)));
        assert!(c.is_adjacent(Cell::new(3, 2)));
        assert!(c.is_adjacent(Cell::new(2, 1)));
        assert!(c.is_adjacent(Cell::new(2, 3)));
    }

    #[test]
    fn test_diagonal_and_distant_not_adjacent() {
        let c = Cell::new(2, 2);
        assert!(!c.is_adjacent(Cell::new(1, 1)));
        assert!(!c.is_adjacent(Cell::new(3, 3)));
        assert!(!c.is_adjacent(Cell::new(2, 4)));
        assert!(!c.is_adjacent(Cell::new(0, 2)));
    }

    #[test]
    fn test_zero_edge_has_no_wraparound() {
        let origin = Cell::new(0, 0);
        assert!(!origin.is_adjacent(Cell::new(usize::MAX, 0)));
        assert!(!origin.is_adjacent(Cell::new(0, usize::MAX)));
    }

    #[test]
    fn test_in_bounds() {
        assert!(Cell::new(2, 2).in_bounds(3, 3));
        assert!(!Cell::new(3, 0).in_bounds(3, 3));
        assert!(!Cell::new(0, 3).in_bounds(3, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::new(4, 7).to_string(), "(4,7)");
    }
}
