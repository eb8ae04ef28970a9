//! CSP-based Sudoku solving for the gridarc workspace.
//!
//! Solving runs in two stages over a shared [`Grid`] of candidate domains:
//!
//! 1. [`propagate`] drains the AC3 arc worklist, narrowing domains to a
//!    fixed point. Many easy puzzles are fully resolved here.
//! 2. [`search`] runs backtracking with forward checking and MRV ordering
//!    from whatever domains propagation left behind.
//!
//! [`solve`] orchestrates both stages and reports which one produced the
//! final board.
//!
//! # Examples
//!
//! ```
//! let puzzle =
//!     "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
//! let solution = gridarc_solver::solve(puzzle)?;
//!
//! assert!(solution.line.starts_with("483921657"));
//! # Ok::<(), gridarc_solver::SolveError>(())
//! ```

use std::fmt::{self, Display};

use gridarc_core::{Grid, ParseGridError};

pub use self::{propagate::propagate, search::search};

mod propagate;
mod search;

/// The stage that produced the final solved board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveMethod {
    /// Constraint propagation alone resolved every cell.
    Ac3,
    /// Backtracking search finished the board.
    Bts,
}

impl SolveMethod {
    /// Returns the output-line tag for this method.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Ac3 => "AC3",
            Self::Bts => "BTS",
        }
    }
}

impl Display for SolveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A solved board together with the stage that produced it.
///
/// The `Display` impl renders the external output contract: the 81-digit
/// solved line, a space, and the `AC3` or `BTS` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The solved board, 81 digits in row-major order.
    pub line: String,
    /// The stage that produced the solution.
    pub method: SolveMethod,
}

impl Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.line, self.method)
    }
}

/// Errors reported by [`solve`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SolveError {
    /// The puzzle line was malformed; nothing was solved.
    #[display("invalid puzzle: {_0}")]
    InvalidPuzzle(#[from] ParseGridError),
    /// The entire search space was exhausted without a full assignment.
    /// Does not occur for well-posed puzzles.
    #[display("search exhausted without finding a solution")]
    SearchExhausted,
}

/// Solves one puzzle line end to end.
///
/// Parses the 81-character puzzle, runs propagation, and, if any cell is
/// still unresolved, runs backtracking search from the pruned domains. The
/// propagation boolean is not used for control flow; only the resolved
/// state of the grid decides whether search runs.
///
/// # Errors
///
/// - [`SolveError::InvalidPuzzle`] if the line is not 81 characters of
///   `'0'..='9'`.
/// - [`SolveError::SearchExhausted`] if no solution exists.
///
/// # Examples
///
/// ```
/// let solved =
///     "483921657967345821251876493548132976729564138136798245372689514814253769695417382";
/// let solution = gridarc_solver::solve(solved)?;
///
/// assert_eq!(solution.to_string(), format!("{solved} AC3"));
/// # Ok::<(), gridarc_solver::SolveError>(())
/// ```
pub fn solve(puzzle: &str) -> Result<Solution, SolveError> {
    let mut grid: Grid = puzzle.parse()?;

    let _ = propagate(&mut grid);
    if let Some(line) = grid.solution_line() {
        return Ok(Solution {
            line,
            method: SolveMethod::Ac3,
        });
    }

    if !search(&mut grid) {
        return Err(SolveError::SearchExhausted);
    }
    let line = grid.solution_line().ok_or(SolveError::SearchExhausted)?;
    Ok(Solution {
        line,
        method: SolveMethod::Bts,
    })
}
