//! Cell identifiers for the 9×9 board.

use std::fmt::{self, Display};

/// A cell of the 9×9 board, stored as a row-major index 0-80.
///
/// Rows are displayed as the letters `A`-`I` and columns as `1`-`9`, so the
/// top-left cell is `A1` and the bottom-right cell is `I9`. Row-major order
/// (`A1, A2, .., A9, B1, ..`) is the canonical iteration and puzzle-line
/// order throughout the crate.
///
/// # Examples
///
/// ```
/// use gridarc_core::Cell;
///
/// let cell = Cell::new(4, 4);
/// assert_eq!(cell.index(), 40);
/// assert_eq!(cell.block(), 4);
/// assert_eq!(cell.to_string(), "E5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Creates a cell from row and column coordinates (both 0-8).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self(row * 9 + col)
    }

    /// Creates a cell from a row-major index 0-80.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 81);
        Self(index)
    }

    /// Returns the row-major index of this cell (0-80).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row of this cell (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 9
    }

    /// Returns the column of this cell (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % 9
    }

    /// Returns the 3×3 block index of this cell (0-8, left to right, top to
    /// bottom).
    #[must_use]
    pub const fn block(self) -> u8 {
        (self.row() / 3) * 3 + self.col() / 3
    }

    /// Returns an iterator over all 81 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Cell::from_index)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = (b'A' + self.row()) as char;
        let col = self.col() + 1;
        write!(f, "{row}{col}")
    }
}
