//! Read-only board view and text rendering.
//!
//! ```text
//!     0   1   2
//!  0: red blu red
//!  1: gre gre yel
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::color::{Color, Palette};

/// Read-only copy of the board colors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Color>>,
}

impl GridSnapshot {
    pub(crate) fn new(rows: usize, cols: usize, cells: Vec<Option<Color>>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
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

    /// Color at `cell`. `None` if out of bounds.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Color> {
        if cell.in_bounds(self.rows, self.cols) {
            self.cells[cell.row * self.cols + cell.col]
        } else {
            None
        }
    }

    /// One row, left to right. `None` if `row` is out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Option<Color>]> {
        self.cells.chunks(self.cols).nth(row)
    }

    /// Iterate rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Option<Color>]> {
        self.cells.chunks(self.cols)
    }

    /// Count cells holding `color`.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| **c == Some(color)).count()
    }

    /// Check that every cell holds a color.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Text rendering using `palette` names.
    #[must_use]
    pub fn display<'a>(&'a self, palette: &'a Palette) -> SnapshotDisplay<'a> {
        SnapshotDisplay { snapshot: self, palette }
    }
}

/// `Display` adapter returned by [`GridSnapshot::display`].
///
/// Each dot is printed as the first three characters of its color name.
pub struct SnapshotDisplay<'a> {
    snapshot: &'a GridSnapshot,
    palette: &'a Palette,
}

impl fmt::Display for SnapshotDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.snapshot.cols {
            write!(f, " {col:3}")?;
        }
        writeln!(f)?;

        for (r, row) in self.snapshot.iter_rows().enumerate() {
            write!(f, "{r:2}:")?;
            for cell in row {
                let name = match cell {
                    Some(color) => self.palette.name(*color),
                    None => ".",
                };
                let short: String = name.chars().take(3).collect();
                write!(f, " {short:3}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GridSnapshot {
        GridSnapshot::new(
            2,
            3,
            vec![
                Some(Color(0)),
                Some(Color(1)),
                Some(Color(0)),
                Some(Color(2)),
                Some(Color(2)),
                Some(Color(3)),
            ],
        )
    }

    #[test]
    fn test_accessors() {
        let s = sample();
        assert_eq!(s.rows(), 2);
        assert_eq!(s.cols(), 3);
        assert_eq!(s.get(Cell::new(1, 2)), Some(Color(3)));
        assert_eq!(s.get(Cell::new(2, 0)), None);
        assert_eq!(s.row(0).unwrap(), &[Some(Color(0)), Some(Color(1)), Some(Color(0))]);
        assert_eq!(s.row(2), None);
        assert_eq!(s.count(Color(0)), 2);
        assert!(s.is_full());
    }

    #[test]
    fn test_render() {
        let palette = Palette::standard(4);
        let text = sample().display(&palette).to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "      0   1   2");
        assert_eq!(lines[1], " 0: red blu red");
        assert_eq!(lines[2], " 1: gre gre yel");
    }

    #[test]
    fn test_render_empty_cell() {
        let palette = Palette::standard(1);
        let s = GridSnapshot::new(1, 2, vec![Some(Color(0)), None]);
        assert_eq!(s.display(&palette).to_string().lines().nth(1), Some(" 0: red .  "));
    }
}
