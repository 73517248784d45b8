//! Growth / termination detection.
//!
//! Diffusion wraps around the lattice edges, so results near the rim are
//! unreliable. A [`GrowthMonitor`] tells the driver when the frozen region
//! has grown far enough that it should stop or regrid.

use rime_core::{Lattice, FREEZE_THRESHOLD};

/// Policy for deciding that a crystal has outgrown its lattice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GrowthMonitor {
    /// Test a single proxy cell at `(center, n / 9)`, roughly one ninth of
    /// the way in from the left edge along the center row. Cheap, and
    /// accurate for crystals that grow with six-fold symmetry along rows.
    #[default]
    ProxyCell,
    /// Scan every frozen cell: too big once any lies fewer than `margin`
    /// cells from the nearest edge. A `margin` of 0 never trips, even with
    /// a frozen rim cell; run configs reject it.
    EdgeDistance {
        /// Number of rim rings that must stay vapor.
        margin: usize,
    },
}

impl GrowthMonitor {
    /// `(row, col)` of the proxy cell for an `n × n` lattice.
    pub fn proxy_cell(size: usize) -> (usize, usize) {
        ((size - 1) / 2, size / 9)
    }

    /// Whether the crystal in `lattice` is too big under this policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use rime_automaton::{GrowthMonitor, Lattice};
    ///
    /// let mut l = Lattice::seeded(27, 0.35).unwrap();
    /// assert!(!GrowthMonitor::ProxyCell.is_too_big(&l));
    /// l.set(13, 3, 1.0).unwrap();
    /// assert!(GrowthMonitor::ProxyCell.is_too_big(&l));
    /// ```
    pub fn is_too_big(&self, lattice: &Lattice) -> bool {
        match *self {
            Self::ProxyCell => {
                let (row, col) = Self::proxy_cell(lattice.size());
                lattice.is_frozen(row, col)
            }
            Self::EdgeDistance { margin } => {
                frozen_edge_distance(lattice).is_some_and(|d| d < margin)
            }
        }
    }
}

/// Distance (in cells) from the frozen region to the nearest lattice edge,
/// or `None` if nothing is frozen. A frozen cell on the rim has distance 0.
pub fn frozen_edge_distance(lattice: &Lattice) -> Option<usize> {
    let n = lattice.size();
    let cells = lattice.as_slice();
    let mut best: Option<usize> = None;
    for row in 0..n {
        for col in 0..n {
            if cells[row * n + col] < FREEZE_THRESHOLD {
                continue;
            }
            let d = row.min(col).min(n - 1 - row).min(n - 1 - col);
            best = Some(best.map_or(d, |b| b.min(d)));
        }
    }
    best
}
