//! The immutable constraint structure of the 9×9 board.
//!
//! Units, neighbors, and arcs are fixed for every Sudoku board, so they are
//! precomputed at compile time and shared by all [`Grid`] instances. The
//! constraint structure is plain data: mappings from a cell to the cells it
//! co-occurs with, with no behavior attached.
//!
//! - [`UNITS`]: the 27 groups of 9 cells that must each contain every digit
//!   exactly once (9 rows, 9 columns, 9 blocks).
//! - [`NEIGHBORS`]: for each cell, the 20 distinct cells sharing at least
//!   one unit with it. The relation is symmetric.
//! - [`arcs`]: the 1620 ordered `(cell, neighbor)` pairs that seed the AC3
//!   worklist, in a deterministic order.
//!
//! [`Grid`]: crate::grid::Grid

use crate::cell::Cell;

/// Number of cells sharing a unit with any given cell.
pub const NEIGHBOR_COUNT: usize = 20;

/// The 27 units of the board: rows 0-8, then columns 0-8, then blocks 0-8.
///
/// Each unit lists its 9 cells in row-major order.
pub static UNITS: [[Cell; 9]; 27] = build_units();

/// For each cell (by row-major index), its 20 neighbors in ascending
/// row-major order.
pub static NEIGHBORS: [[Cell; NEIGHBOR_COUNT]; 81] = build_neighbors();

/// Returns the neighbors of a cell.
#[must_use]
pub fn neighbors(cell: Cell) -> &'static [Cell; NEIGHBOR_COUNT] {
    &NEIGHBORS[cell.index() as usize]
}

/// Returns `true` if the two cells are distinct and share a row, column, or
/// block.
#[must_use]
pub const fn are_neighbors(a: Cell, b: Cell) -> bool {
    a.index() != b.index()
        && (a.row() == b.row() || a.col() == b.col() || a.block() == b.block())
}

/// Returns an iterator over all 1620 directed arcs `(x, y)` where `y` is a
/// neighbor of `x`.
///
/// The order is deterministic: cells in row-major order, and for each cell
/// its neighbors in ascending row-major order. This is the seed order of the
/// propagation worklist, fixed so that runs are reproducible.
pub fn arcs() -> impl Iterator<Item = (Cell, Cell)> {
    Cell::all().flat_map(|x| neighbors(x).iter().map(move |&y| (x, y)))
}

const fn build_units() -> [[Cell; 9]; 27] {
    let mut units = [[Cell::from_index(0); 9]; 27];
    let mut i = 0;
    while i < 9 {
        let mut j = 0;
        while j < 9 {
            #[expect(clippy::cast_possible_truncation)]
            let (u, c) = (i as u8, j as u8);
            units[i][j] = Cell::new(u, c);
            units[i + 9][j] = Cell::new(c, u);
            units[i + 18][j] = Cell::new((u / 3) * 3 + c / 3, (u % 3) * 3 + c % 3);
            j += 1;
        }
        i += 1;
    }
    units
}

const fn build_neighbors() -> [[Cell; NEIGHBOR_COUNT]; 81] {
    let mut table = [[Cell::from_index(0); NEIGHBOR_COUNT]; 81];
    let mut index = 0u8;
    while index < 81 {
        let cell = Cell::from_index(index);
        let mut count = 0;
        let mut other = 0u8;
        while other < 81 {
            if are_neighbors(cell, Cell::from_index(other)) {
                table[index as usize][count] = Cell::from_index(other);
                count += 1;
            }
            other += 1;
        }
        assert!(count == NEIGHBOR_COUNT);
        index += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_every_cell_belongs_to_three_units() {
        for cell in Cell::all() {
            let count = UNITS
                .iter()
                .filter(|unit| unit.contains(&cell))
                .count();
            assert_eq!(count, 3, "cell {cell} should be in exactly 3 units");
        }
    }

    #[test]
    fn test_units_cover_rows_columns_blocks() {
        // Rows first, then columns, then blocks
        assert_eq!(UNITS[0][0], Cell::new(0, 0));
        assert_eq!(UNITS[0][8], Cell::new(0, 8));
        assert_eq!(UNITS[9][8], Cell::new(8, 0));
        assert_eq!(UNITS[18][8], Cell::new(2, 2));
        assert_eq!(UNITS[26][0], Cell::new(6, 6));

        for unit in &UNITS {
            let distinct: HashSet<_> = unit.iter().collect();
            assert_eq!(distinct.len(), 9);
        }
    }

    #[test]
    fn test_neighbor_count_and_symmetry() {
        for cell in Cell::all() {
            let set: HashSet<_> = neighbors(cell).iter().copied().collect();
            assert_eq!(set.len(), NEIGHBOR_COUNT);
            assert!(!set.contains(&cell));
            for &other in neighbors(cell) {
                assert!(
                    neighbors(other).contains(&cell),
                    "neighbor relation must be symmetric: {cell} / {other}"
                );
            }
        }
    }

    #[test]
    fn test_neighbors_match_unit_membership() {
        for cell in Cell::all() {
            let from_units: HashSet<_> = UNITS
                .iter()
                .filter(|unit| unit.contains(&cell))
                .flatten()
                .copied()
                .filter(|&other| other != cell)
                .collect();
            let from_table: HashSet<_> = neighbors(cell).iter().copied().collect();
            assert_eq!(from_units, from_table);
        }
    }

    #[test]
    fn test_arc_count_and_order() {
        let arcs: Vec<_> = arcs().collect();
        assert_eq!(arcs.len(), 81 * NEIGHBOR_COUNT);

        // Row-major in the first component, ascending in the second
        assert_eq!(arcs[0], (Cell::new(0, 0), Cell::new(0, 1)));
        assert!(arcs.windows(2).all(|w| w[0].0 <= w[1].0));

        let distinct: HashSet<_> = arcs.iter().collect();
        assert_eq!(distinct.len(), 1620);
    }
}
