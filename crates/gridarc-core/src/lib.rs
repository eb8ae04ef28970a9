//! Core data structures for the gridarc Sudoku solver.
//!
//! This crate provides the board model shared by the propagation and search
//! engines:
//!
//! - [`digit`]: type-safe representation of the digits 1-9
//! - [`digit_set`]: a 9-bit candidate set, the domain of a single cell
//! - [`cell`]: row-major cell identifiers for the 9×9 board
//! - [`geometry`]: the immutable constraint structure (units, neighbors,
//!   arcs), precomputed once for all boards
//! - [`grid`]: the mutable domain grid, with puzzle-line parsing and
//!   solved-board serialization
//!
//! # Examples
//!
//! ```
//! use gridarc_core::{Cell, Digit, Grid};
//!
//! let mut grid = Grid::empty();
//! grid.assign(Cell::new(0, 0), Digit::D5);
//!
//! assert_eq!(grid.domain(Cell::new(0, 0)).as_single(), Some(Digit::D5));
//! ```

pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod geometry;
pub mod grid;

pub use self::{
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, ParseGridError},
};
