//! Edge (boundary) behaviour for the hexagonal lattice.

/// How the lattice resolves neighbours that fall past its edges.
///
/// The same behaviour is used for both diffusion and receptive-site
/// detection; mixing behaviours between the two would bias the crystal.
///
/// # Examples
///
/// ```
/// use rime_space::{EdgeBehavior, OffsetHex};
///
/// // Wrap: every cell has six neighbours (torus).
/// let wrap = OffsetHex::new(5, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(wrap.neighbours(0, 0).len(), 6);
///
/// // Absorb: the top-left corner keeps only two.
/// let absorb = OffsetHex::new(5, EdgeBehavior::Absorb).unwrap();
/// assert_eq!(absorb.neighbours(0, 0).len(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-range index wraps to the opposite side (toroidal).
    #[default]
    Wrap,
    /// Out-of-range neighbour resolves to the cell itself (reflecting).
    /// A share aimed past the edge stays where it started.
    Clamp,
    /// Out-of-range neighbour is omitted. Shares aimed past the edge
    /// leave the system.
    Absorb,
}

impl EdgeBehavior {
    /// Resolve the step `delta` from `origin` on a `len × len` lattice.
    ///
    /// Returns `None` only for [`EdgeBehavior::Absorb`] out of range.
    /// Under [`EdgeBehavior::Clamp`] an out-of-range target on either
    /// axis resolves to `origin`, so every in-range neighbour relation
    /// stays mutual and a uniform field is stationary.
    #[inline]
    pub fn resolve(
        self,
        origin: (usize, usize),
        delta: (isize, isize),
        len: usize,
    ) -> Option<(usize, usize)> {
        let len_i = len as isize;
        let row = origin.0 as isize + delta.0;
        let col = origin.1 as isize + delta.1;
        let inside = |v: isize| v >= 0 && v < len_i;
        let wrap = |v: isize| v.rem_euclid(len_i) as usize;
        if inside(row) && inside(col) {
            return Some((row as usize, col as usize));
        }
        match self {
            Self::Absorb => None,
            Self::Clamp => Some(origin),
            Self::Wrap => Some((wrap(row), wrap(col))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_bounds_is_identity() {
        for edge in [EdgeBehavior::Wrap, EdgeBehavior::Clamp, EdgeBehavior::Absorb] {
            assert_eq!(edge.resolve((2, 2), (0, 1), 5), Some((2, 3)));
            assert_eq!(edge.resolve((1, 0), (-1, 0), 5), Some((0, 0)));
        }
    }

    #[test]
    fn absorb_out_of_bounds() {
        assert_eq!(EdgeBehavior::Absorb.resolve((0, 2), (-1, 0), 5), None);
        assert_eq!(EdgeBehavior::Absorb.resolve((2, 4), (0, 1), 5), None);
    }

    #[test]
    fn clamp_out_of_bounds_stays_home() {
        assert_eq!(EdgeBehavior::Clamp.resolve((0, 2), (-1, 0), 5), Some((0, 2)));
        // Diagonal with only the column off the lattice: still home, not
        // slid along the rim.
        assert_eq!(EdgeBehavior::Clamp.resolve((2, 0), (1, -1), 5), Some((2, 0)));
        assert_eq!(EdgeBehavior::Clamp.resolve((4, 4), (1, 1), 5), Some((4, 4)));
    }

    #[test]
    fn wrap_out_of_bounds() {
        assert_eq!(EdgeBehavior::Wrap.resolve((0, 0), (-1, -1), 5), Some((4, 4)));
        assert_eq!(EdgeBehavior::Wrap.resolve((4, 2), (1, 0), 5), Some((0, 2)));
        assert_eq!(EdgeBehavior::Wrap.resolve((3, 4), (0, 1), 5), Some((3, 0)));
    }

    #[test]
    fn default_is_wrap() {
        assert_eq!(EdgeBehavior::default(), EdgeBehavior::Wrap);
    }
}
