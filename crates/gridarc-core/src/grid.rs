//! The mutable domain grid (Board Model).
//!
//! A [`Grid`] holds the current candidate set of every cell. It is built
//! once from an 81-character puzzle line and then mutated in place by the
//! propagation and search engines. The immutable constraint structure lives
//! in [`geometry`](crate::geometry); the grid only owns the domains.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{cell::Cell, digit::Digit, digit_set::DigitSet};

/// A full copy of all 81 cell domains, used for search rollback.
///
/// Restoring a snapshot is lossless by construction: the snapshot is a plain
/// `Copy` of the domain array, so no pruning from a rejected search branch
/// can leak into the next attempt.
pub type DomainSnapshot = [DigitSet; 81];

/// Errors produced when parsing a puzzle line.
///
/// Both variants correspond to malformed raw input and are surfaced before
/// any solving begins; no partial grid is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The puzzle line was not exactly 81 characters.
    #[display("puzzle line must be 81 characters, got {len}")]
    InvalidLength {
        /// Actual character count of the input.
        len: usize,
    },
    /// The puzzle line contained a character outside `'0'..='9'`.
    #[display("invalid character {ch:?} at position {index}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Its position in the input line.
        index: usize,
    },
}

/// The domain grid of a 9×9 Sudoku board.
///
/// Each of the 81 cells holds a [`DigitSet`] of remaining candidates. A cell
/// is *resolved* when its set is a singleton; the grid is resolved when
/// every cell is.
///
/// # Examples
///
/// ```
/// use gridarc_core::Grid;
///
/// let line = "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
/// let grid: Grid = line.parse()?;
///
/// assert!(!grid.is_resolved());
/// assert_eq!(grid.given_line(), line);
/// # Ok::<(), gridarc_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    domains: DomainSnapshot,
}

impl Grid {
    /// Creates a grid with every cell holding the full candidate set.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            domains: [DigitSet::FULL; 81],
        }
    }

    /// Parses an 81-character puzzle line, row-major, `'0'` marking blanks.
    ///
    /// A blank cell starts with the full candidate set; a given digit starts
    /// as a singleton.
    ///
    /// # Errors
    ///
    /// Returns [`ParseGridError`] if the line is not exactly 81 characters
    /// or contains a character outside `'0'..='9'`.
    pub fn from_line(line: &str) -> Result<Self, ParseGridError> {
        let len = line.chars().count();
        if len != 81 {
            return Err(ParseGridError::InvalidLength { len });
        }
        let mut grid = Self::empty();
        for (index, ch) in line.chars().enumerate() {
            match ch {
                '0' => {}
                _ => {
                    let digit = Digit::from_char(ch)
                        .ok_or(ParseGridError::InvalidCharacter { ch, index })?;
                    #[expect(clippy::cast_possible_truncation)]
                    let cell = Cell::from_index(index as u8);
                    grid.domains[index] = DigitSet::from_elem(digit);
                    debug_assert!(grid.domain(cell).as_single() == Some(digit));
                }
            }
        }
        Ok(grid)
    }

    /// Returns the current candidate set of a cell.
    #[must_use]
    pub const fn domain(&self, cell: Cell) -> DigitSet {
        self.domains[cell.index() as usize]
    }

    /// Replaces the candidate set of a cell.
    pub const fn set_domain(&mut self, cell: Cell, domain: DigitSet) {
        self.domains[cell.index() as usize] = domain;
    }

    /// Collapses a cell's candidate set to a single digit.
    pub const fn assign(&mut self, cell: Cell, digit: Digit) {
        self.set_domain(cell, DigitSet::from_elem(digit));
    }

    /// Removes a single candidate from a cell.
    pub const fn remove_candidate(&mut self, cell: Cell, digit: Digit) {
        self.domains[cell.index() as usize].remove(digit);
    }

    /// Returns `true` if every cell's candidate set is a singleton.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.domains.iter().all(|domain| domain.len() == 1)
    }

    /// Returns `true` if any cell's candidate set is empty.
    #[must_use]
    pub fn has_empty_domain(&self) -> bool {
        self.domains.iter().any(|domain| domain.is_empty())
    }

    /// Takes a full copy of all domains for later [`restore`](Self::restore).
    #[must_use]
    pub const fn snapshot(&self) -> DomainSnapshot {
        self.domains
    }

    /// Restores all domains from a snapshot taken earlier.
    pub const fn restore(&mut self, snapshot: DomainSnapshot) {
        self.domains = snapshot;
    }

    /// Serializes the resolved board as an 81-digit line, row-major.
    ///
    /// Returns `None` if any cell is still unresolved; callers must check
    /// before emitting output.
    #[must_use]
    pub fn solution_line(&self) -> Option<String> {
        self.domains
            .iter()
            .map(|domain| domain.as_single().map(Digit::to_char))
            .collect()
    }

    /// Serializes the current grid in puzzle-line format, with `'0'` for
    /// every unresolved cell.
    #[must_use]
    pub fn given_line(&self) -> String {
        self.domains
            .iter()
            .map(|domain| domain.as_single().map_or('0', Digit::to_char))
            .collect()
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_line(s)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.given_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASY: &str =
        "003020600900305001001806400008102900700000008006708200002609500800203009005010300";

    #[test]
    fn test_parse_sets_domains() {
        let grid = Grid::from_line(EASY).unwrap();

        // A3 is a given '3'
        assert_eq!(
            grid.domain(Cell::new(0, 2)).as_single(),
            Some(Digit::D3)
        );
        // A1 is blank
        assert_eq!(grid.domain(Cell::new(0, 0)), DigitSet::FULL);
    }

    #[test]
    fn test_parse_rejects_short_input() {
        let short = &EASY[..80];
        assert_eq!(
            Grid::from_line(short),
            Err(ParseGridError::InvalidLength { len: 80 })
        );
    }

    #[test]
    fn test_parse_rejects_long_input() {
        let long = format!("{EASY}0");
        assert_eq!(
            Grid::from_line(&long),
            Err(ParseGridError::InvalidLength { len: 82 })
        );
    }

    #[test]
    fn test_parse_rejects_letters() {
        let mut bad: Vec<char> = EASY.chars().collect();
        bad[17] = 'x';
        let bad: String = bad.into_iter().collect();
        assert_eq!(
            Grid::from_line(&bad),
            Err(ParseGridError::InvalidCharacter { ch: 'x', index: 17 })
        );
    }

    #[test]
    fn test_given_line_round_trip() {
        let grid = Grid::from_line(EASY).unwrap();
        assert_eq!(grid.given_line(), EASY);
        assert_eq!(grid.to_string(), EASY);
    }

    #[test]
    fn test_solution_line_requires_resolution() {
        let grid = Grid::from_line(EASY).unwrap();
        assert_eq!(grid.solution_line(), None);

        let mut resolved = Grid::empty();
        for cell in Cell::all() {
            resolved.assign(cell, Digit::from_value(cell.col() + 1));
        }
        assert!(resolved.is_resolved());
        let line = resolved.solution_line().unwrap();
        assert_eq!(line.len(), 81);
        assert!(line.starts_with("123456789"));
    }

    #[test]
    fn test_snapshot_restore_is_lossless() {
        let mut grid = Grid::from_line(EASY).unwrap();
        let snapshot = grid.snapshot();

        grid.assign(Cell::new(0, 0), Digit::D4);
        for &neighbor in crate::geometry::neighbors(Cell::new(0, 0)) {
            grid.remove_candidate(neighbor, Digit::D4);
        }
        assert_ne!(grid.snapshot(), snapshot);

        grid.restore(snapshot);
        assert_eq!(grid.snapshot(), snapshot);
        assert_eq!(grid.given_line(), EASY);
    }
}
