//! Topology compliance test helpers.
//!
//! These functions verify that an [`OffsetHex`] satisfies the addressing
//! contract for its edge behaviour. Reused by every topology test module.

use crate::edge::EdgeBehavior;
use crate::offset_hex::OffsetHex;
use indexmap::IndexSet;

/// Whether a step from `row` to `nb_row` crosses the wrap seam between
/// the last row and row 0.
pub(crate) fn crosses_row_seam(n: usize, row: usize, nb_row: usize) -> bool {
    n > 1 && ((row == 0 && nb_row == n - 1) || (row == n - 1 && nb_row == 0))
}

/// Assert that every neighbour address lies inside the lattice.
pub fn assert_neighbours_in_bounds(space: &OffsetHex) {
    let n = space.size();
    for row in 0..n {
        for col in 0..n {
            for (r, c) in space.neighbours(row, col) {
                assert!(
                    r < n && c < n,
                    "neighbour ({r}, {c}) of ({row}, {col}) outside {n}x{n}"
                );
            }
        }
    }
}

/// Assert the neighbour count contract.
///
/// Wrap and Clamp always yield six entries; Absorb yields six for every
/// cell at least one step from each edge, fewer only on the rim.
pub fn assert_neighbour_counts(space: &OffsetHex) {
    let n = space.size();
    for row in 0..n {
        for col in 0..n {
            let count = space.neighbours(row, col).len();
            let interior = row > 0 && col > 0 && row + 1 < n && col + 1 < n;
            match space.edge_behavior() {
                EdgeBehavior::Wrap | EdgeBehavior::Clamp => assert_eq!(
                    count, 6,
                    "({row}, {col}) has {count} neighbours under {:?}",
                    space.edge_behavior()
                ),
                EdgeBehavior::Absorb if interior => assert_eq!(count, 6),
                EdgeBehavior::Absorb => assert!(count < 6, "rim cell ({row}, {col}) has 6"),
            }
        }
    }
}

/// Assert that no address appears twice in a neighbour list where the
/// edge behaviour cannot fold two offsets onto one cell.
pub fn assert_neighbours_distinct(space: &OffsetHex) {
    let n = space.size();
    let folds = match space.edge_behavior() {
        EdgeBehavior::Clamp => true,
        EdgeBehavior::Wrap => n < 3,
        EdgeBehavior::Absorb => false,
    };
    if folds {
        return;
    }
    for row in 0..n {
        for col in 0..n {
            let list = space.neighbours(row, col);
            let unique: IndexSet<(usize, usize)> = list.iter().copied().collect();
            assert_eq!(
                unique.len(),
                list.len(),
                "duplicate neighbours for ({row}, {col}): {list:?}"
            );
            assert!(
                !unique.contains(&(row, col)),
                "({row}, {col}) lists itself"
            );
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
///
/// Under Wrap, pairs straddling the row seam are skipped: with odd `n`
/// the first and last rows share parity, so their diagonals disagree.
pub fn assert_neighbours_symmetric(space: &OffsetHex) {
    let n = space.size();
    let wrap = space.edge_behavior() == EdgeBehavior::Wrap;
    for row in 0..n {
        for col in 0..n {
            for nb in space.neighbours(row, col) {
                if nb == (row, col) || (wrap && crosses_row_seam(n, row, nb.0)) {
                    continue;
                }
                assert!(
                    space.neighbours(nb.0, nb.1).contains(&(row, col)),
                    "neighbour symmetry violated: {nb:?} in N(({row}, {col})) but not vice versa"
                );
            }
        }
    }
}

/// Run every compliance check.
pub fn run_full_compliance(space: &OffsetHex) {
    assert_neighbours_in_bounds(space);
    assert_neighbour_counts(space);
    assert_neighbours_distinct(space);
    assert_neighbours_symmetric(space);
}
