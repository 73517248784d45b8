//! Hexagonal topology on a square array via row-parity offsets.

use crate::edge::EdgeBehavior;
use rime_core::{Lattice, LatticeError};
use smallvec::SmallVec;

/// Hex neighbour offsets `(drow, dcol)` for a cell in row `row`.
///
/// Order: S, N, E, W, then the two diagonals. The diagonals lean left on
/// even rows and right on odd rows. This is the only place row parity is
/// consulted.
#[inline]
pub const fn hex_offsets(row: usize) -> [(isize, isize); 6] {
    let dc = if row % 2 == 0 { -1 } else { 1 };
    [(1, 0), (-1, 0), (0, 1), (0, -1), (1, dc), (-1, dc)]
}

/// Hexagonal neighbour addressing over an `n × n` square array.
///
/// Even-indexed rows are shifted half a cell left of odd rows, so each
/// cell touches its four compass neighbours plus two diagonals whose
/// column offset depends on row parity (see [`hex_offsets`]).
///
/// With [`EdgeBehavior::Wrap`] and odd `n`, rows `n - 1` and `0` are
/// both even, so the parity alternation breaks across that row seam:
/// the diagonal relation is not symmetric for pairs straddling it. The
/// compass relation, and every pair away from the seam, stay symmetric.
///
/// # Examples
///
/// ```
/// use rime_space::{EdgeBehavior, OffsetHex};
///
/// let hex = OffsetHex::new(7, EdgeBehavior::Wrap).unwrap();
/// // Even row: diagonals lean left.
/// let n = hex.neighbours(2, 3);
/// assert!(n.contains(&(3, 2)) && n.contains(&(1, 2)));
/// // Odd row: diagonals lean right.
/// let n = hex.neighbours(3, 3);
/// assert!(n.contains(&(4, 4)) && n.contains(&(2, 4)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OffsetHex {
    size: usize,
    edge: EdgeBehavior,
}

impl OffsetHex {
    /// Create the topology for an `size × size` lattice.
    ///
    /// Returns [`LatticeError::InvalidDimension`] unless `size` is a
    /// positive odd integer.
    pub fn new(size: usize, edge: EdgeBehavior) -> Result<Self, LatticeError> {
        Lattice::check_size(size)?;
        Ok(Self { size, edge })
    }

    /// Topology matching an existing lattice. Cannot fail: a `Lattice`
    /// always has a valid size.
    pub fn for_lattice(lattice: &Lattice, edge: EdgeBehavior) -> Self {
        Self {
            size: lattice.size(),
            edge,
        }
    }

    /// Side length `n`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Edge behaviour.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Hex neighbours of `(row, col)` as `(row, col)` pairs.
    ///
    /// Under [`EdgeBehavior::Clamp`] an off-lattice entry is the cell
    /// itself, possibly more than once; under [`EdgeBehavior::Absorb`] edge cells get fewer
    /// than six entries.
    pub fn neighbours(&self, row: usize, col: usize) -> SmallVec<[(usize, usize); 6]> {
        let mut result = SmallVec::new();
        for (dr, dc) in hex_offsets(row) {
            if let Some(nb) = self.edge.resolve((row, col), (dr, dc), self.size) {
                result.push(nb);
            }
        }
        result
    }

    /// Hex neighbours of `(row, col)` as row-major flat indices.
    #[inline]
    pub fn neighbours_flat(&self, row: usize, col: usize) -> SmallVec<[usize; 6]> {
        self.neighbours(row, col)
            .into_iter()
            .map(|(r, c)| r * self.size + c)
            .collect()
    }

    /// Axial `(q, r)` hex coordinates of `(row, col)`, ignoring edges.
    pub fn axial(row: usize, col: usize) -> (isize, isize) {
        let r = row as isize;
        let q = col as isize - (r - (r & 1)) / 2;
        (q, r)
    }

    /// Hex step count between two cells on the unwrapped plane.
    pub fn planar_distance(a: (usize, usize), b: (usize, usize)) -> usize {
        let (q1, r1) = Self::axial(a.0, a.1);
        let (q2, r2) = Self::axial(b.0, b.1);
        let dq = (q1 - q2).abs();
        let dr = (r1 - r2).abs();
        let ds = ((q1 + r1) - (q2 + r2)).abs();
        dq.max(dr).max(ds) as usize
    }
}
