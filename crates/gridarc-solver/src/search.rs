//! The backtracking search engine.
//!
//! Search explores assignments for the cells propagation left unresolved,
//! mutating the same domain grid the propagation engine produced. Three
//! pruning strategies keep typical instances tractable:
//!
//! - **MRV variable selection**: the unassigned cell with the fewest
//!   remaining candidates is tried first; ties go to the first minimum in
//!   row-major order.
//! - **Legality check**: a candidate is skipped when an already-assigned
//!   neighbor holds the same digit.
//! - **Forward checking**: a tentative assignment eagerly removes the digit
//!   from every neighbor's domain. A neighbor emptied this way does not
//!   fail the branch immediately; it simply has no candidates when it is
//!   selected later, dead-ending the branch there.
//!
//! Because forward checking has side effects beyond the assigned cell, every
//! search node takes a full domain snapshot before trying its candidates and
//! restores it after each rejected one, so no pruning leaks between
//! branches.

use gridarc_core::{Cell, Digit, Grid, geometry};

/// The partial cell-to-digit mapping built during search.
///
/// It exists only for the duration of one [`search`] call; once the search
/// succeeds, the solution is read back out of the (now fully resolved)
/// domain grid.
#[derive(Debug, Clone)]
struct Assignment {
    digits: [Option<Digit>; 81],
    assigned: usize,
}

impl Assignment {
    fn new() -> Self {
        Self {
            digits: [None; 81],
            assigned: 0,
        }
    }

    fn get(&self, cell: Cell) -> Option<Digit> {
        self.digits[cell.index() as usize]
    }

    fn set(&mut self, cell: Cell, digit: Digit) {
        debug_assert!(self.get(cell).is_none());
        self.digits[cell.index() as usize] = Some(digit);
        self.assigned += 1;
    }

    fn unset(&mut self, cell: Cell) {
        debug_assert!(self.get(cell).is_some());
        self.digits[cell.index() as usize] = None;
        self.assigned -= 1;
    }

    fn is_complete(&self) -> bool {
        self.assigned == 81
    }
}

/// Runs backtracking search with forward checking over the grid's domains.
///
/// Returns `true` if a full assignment was found, in which case every
/// domain in the grid is a singleton and [`Grid::solution_line`] yields the
/// solved board. Returns `false` if the entire search space was exhausted;
/// the grid is then restored to the state it had on entry.
///
/// # Examples
///
/// ```
/// use gridarc_core::Grid;
/// use gridarc_solver::search;
///
/// let mut grid = Grid::empty();
/// assert!(search(&mut grid));
/// assert!(grid.is_resolved());
/// ```
pub fn search(grid: &mut Grid) -> bool {
    let mut assignment = Assignment::new();
    backtrack(grid, &mut assignment)
}

fn backtrack(grid: &mut Grid, assignment: &mut Assignment) -> bool {
    if assignment.is_complete() {
        return true;
    }
    let Some(cell) = select_unassigned(grid, assignment) else {
        // Unreachable while the assignment is incomplete
        return false;
    };
    let snapshot = grid.snapshot();
    // Candidates are fixed at node entry; forward checking below must not
    // affect the iteration.
    for digit in grid.domain(cell) {
        if !is_legal(assignment, cell, digit) {
            continue;
        }
        assignment.set(cell, digit);
        forward_check(grid, cell, digit);
        if backtrack(grid, assignment) {
            return true;
        }
        assignment.unset(cell);
        grid.restore(snapshot);
    }
    false
}

/// Selects the unassigned cell with the fewest remaining candidates (MRV),
/// breaking ties toward the first minimum in row-major order.
fn select_unassigned(grid: &Grid, assignment: &Assignment) -> Option<Cell> {
    let mut best: Option<(Cell, u32)> = None;
    for cell in Cell::all() {
        if assignment.get(cell).is_some() {
            continue;
        }
        let len = grid.domain(cell).len();
        if best.is_none_or(|(_, best_len)| len < best_len) {
            best = Some((cell, len));
        }
    }
    best.map(|(cell, _)| cell)
}

/// A candidate is legal when no already-assigned neighbor holds it.
fn is_legal(assignment: &Assignment, cell: Cell, digit: Digit) -> bool {
    geometry::neighbors(cell)
        .iter()
        .all(|&neighbor| assignment.get(neighbor) != Some(digit))
}

/// Commits a tentative assignment: collapse the cell's domain and prune the
/// digit from every neighbor.
fn forward_check(grid: &mut Grid, cell: Cell, digit: Digit) {
    grid.assign(cell, digit);
    for &neighbor in geometry::neighbors(cell) {
        grid.remove_candidate(neighbor, digit);
    }
}

#[cfg(test)]
mod tests {
    use gridarc_core::geometry::UNITS;

    use super::*;
    use crate::propagate;

    fn assert_valid_solution(grid: &Grid) {
        for unit in &UNITS {
            let mut seen = [false; 9];
            for &cell in unit {
                let digit = grid.domain(cell).as_single().expect("unresolved cell");
                let slot = &mut seen[(digit.value() - 1) as usize];
                assert!(!*slot, "digit {digit} repeated in a unit");
                *slot = true;
            }
        }
    }

    #[test]
    fn test_solves_empty_board() {
        let mut grid = Grid::empty();
        assert!(search(&mut grid));
        assert!(grid.is_resolved());
        assert_valid_solution(&grid);
    }

    #[test]
    fn test_solves_hard_puzzle_after_propagation() {
        // Propagation alone cannot resolve this one; search has to finish it
        let line =
            "400000805030000000000700000020000060000080400000010000000603070500200000104000000";
        let mut grid: Grid = line.parse().unwrap();

        propagate(&mut grid);
        assert!(!grid.is_resolved());
        assert!(search(&mut grid));
        assert_valid_solution(&grid);

        // Given clues survive into the solution
        for (index, ch) in line.chars().enumerate() {
            if ch != '0' {
                #[expect(clippy::cast_possible_truncation)]
                let cell = Cell::from_index(index as u8);
                assert_eq!(grid.domain(cell).as_single().unwrap().to_char(), ch);
            }
        }
    }

    #[test]
    fn test_exhaustion_restores_entry_domains() {
        // Two 5s in one row make the board unsolvable
        let line = format!("55{}", "0".repeat(79));
        let mut grid: Grid = line.parse().unwrap();
        let entry = grid.snapshot();

        assert!(!search(&mut grid));
        assert_eq!(grid.snapshot(), entry, "rollback must be lossless");
    }

    #[test]
    fn test_mrv_prefers_smallest_domain() {
        let mut grid = Grid::empty();
        let assignment = Assignment::new();

        // E5 narrowed to 2 candidates; everything else full
        let mut narrow = gridarc_core::DigitSet::new();
        narrow.insert(Digit::D3);
        narrow.insert(Digit::D7);
        grid.set_domain(Cell::new(4, 4), narrow);

        assert_eq!(select_unassigned(&grid, &assignment), Some(Cell::new(4, 4)));
    }

    #[test]
    fn test_mrv_ties_break_row_major() {
        let grid = Grid::empty();
        let mut assignment = Assignment::new();

        // With uniform domains the first unassigned cell wins
        assert_eq!(select_unassigned(&grid, &assignment), Some(Cell::new(0, 0)));
        assignment.set(Cell::new(0, 0), Digit::D1);
        assert_eq!(select_unassigned(&grid, &assignment), Some(Cell::new(0, 1)));
    }

    #[test]
    fn test_is_legal_rejects_assigned_neighbor_conflict() {
        let mut assignment = Assignment::new();
        assignment.set(Cell::new(0, 0), Digit::D5);

        // Same row
        assert!(!is_legal(&assignment, Cell::new(0, 8), Digit::D5));
        // Same column
        assert!(!is_legal(&assignment, Cell::new(8, 0), Digit::D5));
        // Same block
        assert!(!is_legal(&assignment, Cell::new(1, 1), Digit::D5));
        // Different digit is fine
        assert!(is_legal(&assignment, Cell::new(0, 8), Digit::D6));
        // Non-neighbor is fine
        assert!(is_legal(&assignment, Cell::new(4, 4), Digit::D5));
    }

    #[test]
    fn test_forward_check_prunes_neighbors() {
        let mut grid = Grid::empty();
        forward_check(&mut grid, Cell::new(0, 0), Digit::D5);

        assert_eq!(grid.domain(Cell::new(0, 0)).as_single(), Some(Digit::D5));
        for &neighbor in geometry::neighbors(Cell::new(0, 0)) {
            assert!(!grid.domain(neighbor).contains(Digit::D5));
        }
        assert!(grid.domain(Cell::new(4, 4)).contains(Digit::D5));
    }
}
