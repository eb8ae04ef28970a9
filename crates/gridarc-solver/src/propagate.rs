//! The AC3 constraint propagation engine.
//!
//! Propagation narrows cell domains by draining a worklist of directed arcs
//! `(x, y)`: an arc is *revised* by removing from `x`'s domain every
//! candidate that has no support in `y`'s domain. Under the pairwise
//! all-different constraint a candidate `v` of `x` is unsupported exactly
//! when `y`'s domain is the singleton `{v}`, so a revision fires only
//! against resolved neighbors.
//!
//! The worklist is seeded with all 1620 arcs in the deterministic order of
//! [`geometry::arcs`], and every successful revision of `x` re-enqueues the
//! reverse arcs `(z, x)` for the other neighbors `z` of `x`, since `x`'s
//! shrinkage may enable further deductions.

use std::collections::VecDeque;

use gridarc_core::{Cell, Grid, geometry};

/// Outcome of revising one arc.
enum Revision {
    /// No candidate of `x` was removed.
    Unchanged,
    /// At least one candidate of `x` was removed; `x`'s domain is non-empty.
    Revised,
    /// The revision would have emptied `x`'s domain. The domain is left
    /// untouched so the grid stays a consistent starting point for search.
    WouldEmpty,
}

/// Runs AC3 to a fixed point over the grid's domains.
///
/// Returns `true` if the worklist drained without any domain becoming
/// empty, `false` if a revision would have emptied a domain. A `false`
/// return is not fatal: it signals that propagation alone cannot resolve
/// the board from the current state, and the (partially pruned, still
/// consistent) domains remain usable by the search engine. Callers decide
/// what to do by inspecting [`Grid::is_resolved`], not this boolean.
///
/// # Examples
///
/// ```
/// use gridarc_core::Grid;
/// use gridarc_solver::propagate;
///
/// let mut grid: Grid =
///     "003020600900305001001806400008102900700000008006708200002609500800203009005010300"
///         .parse()?;
/// propagate(&mut grid);
/// # Ok::<(), gridarc_core::ParseGridError>(())
/// ```
pub fn propagate(grid: &mut Grid) -> bool {
    let mut worklist: VecDeque<(Cell, Cell)> = geometry::arcs().collect();
    while let Some((x, y)) = worklist.pop_front() {
        match revise(grid, x, y) {
            Revision::Unchanged => {}
            Revision::Revised => {
                for &z in geometry::neighbors(x) {
                    if z != y {
                        worklist.push_back((z, x));
                    }
                }
            }
            Revision::WouldEmpty => return false,
        }
    }
    true
}

/// Removes from `x`'s domain the candidates unsupported by `y`'s domain.
fn revise(grid: &mut Grid, x: Cell, y: Cell) -> Revision {
    // Only a resolved neighbor removes support under the != constraint.
    let Some(pinned) = grid.domain(y).as_single() else {
        return Revision::Unchanged;
    };
    let domain = grid.domain(x);
    if !domain.contains(pinned) {
        return Revision::Unchanged;
    }
    let mut revised = domain;
    revised.remove(pinned);
    if revised.is_empty() {
        return Revision::WouldEmpty;
    }
    grid.set_domain(x, revised);
    Revision::Revised
}
