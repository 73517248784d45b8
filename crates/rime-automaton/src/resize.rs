//! Grid resize: embed a lattice in a larger one padded with background.

use rime_core::{Lattice, LatticeError};

/// Embed `lattice` at offset `(margin, margin)` in a lattice of side
/// `n + 2 * margin` filled with `beta`.
///
/// An odd `n` plus an even `2 * margin` stays odd, so the single-center
/// invariant carries over and the crystal keeps its center. Padding cells
/// are never frozen because `beta` must be below `1.0`.
///
/// # Errors
///
/// - [`LatticeError::InvalidBackground`] unless `beta` is in `[0, 1)`
/// - [`LatticeError::InvalidDimension`] if the padded size overflows
///
/// # Examples
///
/// ```
/// use rime_automaton::{pad, Lattice};
///
/// let small = Lattice::seeded(3, 0.35).unwrap();
/// let big = pad(&small, 0.35, 2).unwrap();
/// assert_eq!(big.size(), 7);
/// assert_eq!(big.get(3, 3), Some(1.0));
/// assert_eq!(big.center(), 3);
/// assert_eq!(big.frozen_count(), 1);
/// ```
pub fn pad(lattice: &Lattice, beta: f64, margin: usize) -> Result<Lattice, LatticeError> {
    Lattice::check_background(beta)?;
    let n = lattice.size();
    let size = margin
        .checked_mul(2)
        .and_then(|m| m.checked_add(n))
        .ok_or_else(|| LatticeError::InvalidDimension {
            size: n,
            reason: format!("padding by {margin} overflows usize"),
        })?;
    let mut out = Lattice::filled(size, beta)?;
    let src = lattice.as_slice();
    let dst = out.as_mut_slice();
    for row in 0..n {
        let from = row * n;
        let to = (row + margin) * size + margin;
        dst[to..to + n].copy_from_slice(&src[from..from + n]);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rime_test_utils::random_lattice;

    #[test]
    fn zero_margin_is_a_copy() {
        let l = random_lattice(7, 0.9, 5);
        assert_eq!(pad(&l, 0.2, 0).unwrap(), l);
    }

    #[test]
    fn center_is_preserved() {
        let mut l = Lattice::seeded(11, 0.35).unwrap();
        for _ in 0..3 {
            l = pad(&l, 0.35, 20).unwrap();
        }
        assert_eq!(l.size(), 131);
        assert_eq!(l.get(l.center(), l.center()), Some(1.0));
    }

    #[test]
    fn rejects_frozen_padding() {
        let l = Lattice::seeded(5, 0.35).unwrap();
        assert!(matches!(
            pad(&l, 1.0, 3),
            Err(LatticeError::InvalidBackground { .. })
        ));
    }

    #[test]
    fn rejects_overflowing_margin() {
        let l = Lattice::seeded(5, 0.35).unwrap();
        assert!(matches!(
            pad(&l, 0.35, usize::MAX / 2),
            Err(LatticeError::InvalidDimension { .. })
        ));
    }

    proptest! {
        #[test]
        fn padding_preserves_content(
            half in 0usize..6,
            margin in 0usize..6,
            beta in 0.0f64..0.99,
            seed in any::<u64>(),
        ) {
            let n = 2 * half + 1;
            let l = random_lattice(n, 2.0, seed);
            let big = pad(&l, beta, margin).unwrap();
            let size = n + 2 * margin;
            prop_assert_eq!(big.size(), size);
            prop_assert_eq!(size % 2, 1);
            for row in 0..size {
                for col in 0..size {
                    let v = big.get(row, col).unwrap();
                    let inside = (margin..margin + n).contains(&row)
                        && (margin..margin + n).contains(&col);
                    if inside {
                        prop_assert_eq!(v, l.get(row - margin, col - margin).unwrap());
                    } else {
                        prop_assert_eq!(v, beta);
                    }
                }
            }
        }
    }
}
