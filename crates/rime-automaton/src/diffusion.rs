//! Hexagonal vapor diffusion kernel.
//!
//! Every cell keeps `1 - α/2` of its mass and scatters `α/12` to each of
//! its six hex neighbours. Contributions are accumulated into a fresh
//! output buffer in row-major source order, so a step never reads a
//! value it has already written.

use rime_core::{check_diffusion_rate, Lattice, LatticeError};
use rime_space::{EdgeBehavior, OffsetHex};

/// Scatter `src` through the kernel, adding into `out`.
///
/// `out` must be zeroed (or hold a partition to sum onto) and have the
/// same length as `src`.
pub(crate) fn scatter_into(src: &[f64], topology: &OffsetHex, alpha: f64, out: &mut [f64]) {
    let n = topology.size();
    debug_assert_eq!(src.len(), n * n);
    debug_assert_eq!(out.len(), n * n);
    let keep = 1.0 - alpha / 2.0;
    let share = alpha / 12.0;
    for row in 0..n {
        for col in 0..n {
            let i = row * n + col;
            let v = src[i];
            if v == 0.0 {
                continue;
            }
            out[i] += keep * v;
            let given = share * v;
            for nb in topology.neighbours_flat(row, col) {
                out[nb] += given;
            }
        }
    }
}

/// Diffuse the densities of `lattice` once.
///
/// Intended for the non-receptive partition of a step, where receptive
/// cells hold `0.0` and so contribute nothing. Mass is conserved under
/// [`EdgeBehavior::Wrap`] and [`EdgeBehavior::Clamp`]; under
/// [`EdgeBehavior::Absorb`] the shares aimed past the edge are lost.
///
/// # Errors
///
/// [`LatticeError::InvalidDiffusionRate`] unless `0 <= alpha <= 2`.
/// Larger values would make the retained weight negative.
///
/// # Examples
///
/// ```
/// use rime_automaton::{diffuse, EdgeBehavior, Lattice};
///
/// let mut l = Lattice::filled(5, 0.0).unwrap();
/// l.set(2, 2, 1.2).unwrap();
/// let out = diffuse(&l, 1.2, EdgeBehavior::Wrap).unwrap();
/// assert!((out.get(2, 2).unwrap() - 0.48).abs() < 1e-12);
/// assert!((out.get(2, 3).unwrap() - 0.12).abs() < 1e-12);
/// assert!((out.total_mass() - 1.2).abs() < 1e-12);
/// ```
pub fn diffuse(lattice: &Lattice, alpha: f64, edge: EdgeBehavior) -> Result<Lattice, LatticeError> {
    check_diffusion_rate(alpha)?;
    let topology = OffsetHex::for_lattice(lattice, edge);
    let mut out = Lattice::filled(lattice.size(), 0.0)?;
    scatter_into(lattice.as_slice(), &topology, alpha, out.as_mut_slice());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rime_test_utils::{assert_close, random_lattice};

    #[test]
    fn uniform_vapor_stays_uniform_on_torus() {
        let l = Lattice::filled(9, 0.35).unwrap();
        let out = diffuse(&l, 1.7, EdgeBehavior::Wrap).unwrap();
        for &v in out.as_slice() {
            assert_close(v, 0.35, 1e-12);
        }
    }

    #[test]
    fn uniform_vapor_stays_uniform_with_clamp() {
        let l = Lattice::filled(7, 0.5).unwrap();
        let out = diffuse(&l, 2.0, EdgeBehavior::Clamp).unwrap();
        for &v in out.as_slice() {
            assert_close(v, 0.5, 1e-12);
        }
    }

    #[test]
    fn point_mass_spreads_to_hex_neighbours_only() {
        let mut l = Lattice::filled(7, 0.0).unwrap();
        l.set(3, 3, 1.0).unwrap();
        let out = diffuse(&l, 1.0, EdgeBehavior::Wrap).unwrap();
        assert_close(out.get(3, 3).unwrap(), 0.5, 1e-12);
        // Row 3 is odd: diagonals at col 4.
        for (r, c) in [(4, 3), (2, 3), (3, 4), (3, 2), (4, 4), (2, 4)] {
            assert_close(out.get(r, c).unwrap(), 1.0 / 12.0, 1e-12);
        }
        assert_eq!(out.get(4, 2), Some(0.0));
        assert_eq!(out.get(2, 2), Some(0.0));
    }

    #[test]
    fn contributions_accumulate() {
        // Two sources share the destination (3, 3).
        let mut l = Lattice::filled(7, 0.0).unwrap();
        l.set(3, 2, 0.6).unwrap();
        l.set(3, 4, 0.6).unwrap();
        let out = diffuse(&l, 2.0, EdgeBehavior::Wrap).unwrap();
        assert_close(out.get(3, 3).unwrap(), 2.0 * 0.6 / 6.0, 1e-12);
        // α = 2 retains nothing at the sources.
        assert_close(out.get(3, 2).unwrap(), 0.0, 1e-12);
    }

    #[test]
    fn zero_alpha_is_identity() {
        let l = random_lattice(9, 0.9, 3);
        let out = diffuse(&l, 0.0, EdgeBehavior::Wrap).unwrap();
        assert_eq!(out, l);
    }

    #[test]
    fn absorb_leaks_at_the_rim() {
        let mut l = Lattice::filled(5, 0.0).unwrap();
        l.set(0, 0, 1.0).unwrap();
        let out = diffuse(&l, 2.0, EdgeBehavior::Absorb).unwrap();
        // Only two of six shares stay on the lattice.
        assert_close(out.total_mass(), 2.0 / 6.0, 1e-12);
    }

    #[test]
    fn rejects_unstable_alpha() {
        let l = Lattice::filled(5, 0.3).unwrap();
        for alpha in [2.44, -0.5, f64::NAN] {
            assert!(matches!(
                diffuse(&l, alpha, EdgeBehavior::Wrap),
                Err(LatticeError::InvalidDiffusionRate { .. })
            ));
        }
    }

    proptest! {
        #[test]
        fn mass_conserved_wrap_and_clamp(
            half in 1usize..8,
            alpha in 0.0f64..=2.0,
            seed in any::<u64>(),
        ) {
            let n = 2 * half + 1;
            let l = random_lattice(n, 0.99, seed);
            for edge in [EdgeBehavior::Wrap, EdgeBehavior::Clamp] {
                let out = diffuse(&l, alpha, edge).unwrap();
                let before = l.total_mass();
                let after = out.total_mass();
                prop_assert!(
                    (before - after).abs() < 1e-9 * before.max(1.0),
                    "{:?}: before={} after={}", edge, before, after
                );
            }
        }

        #[test]
        fn never_negative(half in 1usize..8, alpha in 0.0f64..=2.0, seed in any::<u64>()) {
            let n = 2 * half + 1;
            let l = random_lattice(n, 0.99, seed);
            let out = diffuse(&l, alpha, EdgeBehavior::Absorb).unwrap();
            prop_assert!(out.as_slice().iter().all(|&v| v >= 0.0));
            prop_assert!(out.total_mass() <= l.total_mass() + 1e-9);
        }
    }
}
